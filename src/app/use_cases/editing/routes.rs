//! Use-Case: Linien anlegen, ändern, löschen und ihre Haltestellen pflegen.

use super::apply_scheme_edit;
use crate::app::notifications::Notification;
use crate::app::AppState;
use crate::core::{LineStyle, RouteUpdate};

/// Legt eine leere Linie an.
pub fn add_route(
    state: &mut AppState,
    number: &str,
    name: Option<&str>,
    color: &str,
    line_width: f32,
    line_style: LineStyle,
) -> Option<String> {
    let id = apply_scheme_edit(state, "Linie anlegen", |scheme| {
        scheme.add_route(number, name, color, line_width, line_style)
    })?;

    log::info!("Linie {} (Nr. {}) angelegt", id, number.trim());
    state.notify(Notification::Info(format!(
        "Linie {} hinzugefügt",
        number.trim()
    )));
    Some(id)
}

/// Übernimmt ein Teil-Update einer Linie.
pub fn update_route(state: &mut AppState, route_id: &str, update: RouteUpdate) {
    if apply_scheme_edit(state, "Linie ändern", |scheme| {
        scheme.update_route(route_id, update)
    })
    .is_some()
    {
        log::info!("Linie {} geändert", route_id);
    }
}

/// Löscht eine Linie.
pub fn delete_route(state: &mut AppState, route_id: &str) {
    if let Some(route) = apply_scheme_edit(state, "Linie löschen", |scheme| {
        scheme.delete_route(route_id)
    }) {
        log::info!("Linie {} (Nr. {}) gelöscht", route.id, route.number);
        state.notify(Notification::Info(format!(
            "Linie {} gelöscht",
            route.number
        )));
    }
}

/// Hängt eine Haltestelle an eine Linie an.
pub fn add_stop_to_route(state: &mut AppState, route_id: &str, stop_id: &str) {
    if apply_scheme_edit(state, "Haltestelle zur Linie hinzufügen", |scheme| {
        scheme.add_stop_to_route(route_id, stop_id)
    })
    .is_some()
    {
        log::info!("Haltestelle {} an Linie {} angehängt", stop_id, route_id);
    }
}

/// Entfernt eine Haltestelle aus einer Linie.
pub fn remove_stop_from_route(state: &mut AppState, route_id: &str, stop_id: &str) {
    let reconnect = state.options.reconnect_on_delete;
    if apply_scheme_edit(state, "Haltestelle aus Linie entfernen", |scheme| {
        scheme.remove_stop_from_route(route_id, stop_id, reconnect)
    })
    .is_some()
    {
        log::info!("Haltestelle {} aus Linie {} entfernt", stop_id, route_id);
    }
}

/// Setzt eine neue Haltestellen-Reihenfolge.
pub fn reorder_route_stops(state: &mut AppState, route_id: &str, stop_ids: &[String]) {
    if apply_scheme_edit(state, "Haltestellen umsortieren", |scheme| {
        scheme.reorder_route_stops(route_id, stop_ids)
    })
    .is_some()
    {
        log::info!("Linie {}: Haltestellen neu angeordnet", route_id);
    }
}

/// Erzeugt alle Segmente einer Linie gerade neu.
pub fn auto_route(state: &mut AppState, route_id: &str) {
    if apply_scheme_edit(state, "Automatische Trassierung", |scheme| {
        scheme.auto_route(route_id)
    })
    .is_some()
    {
        log::info!("Linie {}: Segmente automatisch erzeugt", route_id);
        state.notify(Notification::Info("Segmente neu erzeugt".to_string()));
    }
}
