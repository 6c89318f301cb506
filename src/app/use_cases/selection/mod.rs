//! Use-Case-Funktionen für Selektion, Ausrichten und Verschieben.

use crate::app::AppState;
use crate::core::AlignAxis;
use std::sync::Arc;

/// Selektiert eine Haltestelle.
///
/// Mit `additive` wird ihre Zugehörigkeit umgeschaltet, sonst ersetzt sie die
/// bisherige Selektion.
pub fn select_stop(state: &mut AppState, stop_id: &str, additive: bool) {
    if state.scheme.stop(stop_id).is_none() {
        log::debug!("Selektion ignoriert: Haltestelle {} existiert nicht", stop_id);
        return;
    }

    if additive {
        let selected = state.selection.toggle(stop_id);
        log::debug!(
            "Haltestelle {} {} ({} selektiert)",
            stop_id,
            if selected { "hinzugefügt" } else { "abgewählt" },
            state.selection.len()
        );
    } else {
        state.selection.replace_with(stop_id);
        log::debug!("Haltestelle {} selektiert", stop_id);
    }
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if !state.selection.is_empty() {
        state.selection.ids_mut().clear();
    }
}

/// Selektiert alle Haltestellen in Sammlungsreihenfolge.
pub fn select_all(state: &mut AppState) {
    state.selection.selected_stop_ids =
        Arc::new(state.scheme.stops().map(|stop| stop.id.clone()).collect());
    log::info!("Alle {} Haltestellen selektiert", state.selection.len());
}

/// Verschiebt alle selektierten Haltestellen um `delta` (ohne Undo-Snapshot,
/// der Lifecycle-Start nimmt ihn auf).
pub fn move_selected_stops(state: &mut AppState, delta: glam::Vec2) -> usize {
    if state.selection.is_empty() {
        return 0;
    }
    let ids = Arc::clone(&state.selection.selected_stop_ids);
    state.scheme_mut().move_stops(ids.iter(), delta)
}

/// Richtet die selektierten Haltestellen auf einer Achse aus.
pub fn align_selected(state: &mut AppState, axis: AlignAxis) {
    let anchor = state.options.align_anchor();
    let ids = Arc::clone(&state.selection.selected_stop_ids);
    if super::editing::apply_scheme_edit(state, "Ausrichten", |scheme| {
        scheme.align_stops(ids.iter(), axis, anchor)
    })
    .is_some()
    {
        log::info!("{} Haltestellen ausgerichtet ({:?})", ids.len(), axis);
    }
}
