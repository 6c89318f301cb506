//! Handler für Linien-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LineStyle, RouteUpdate};

/// Legt eine Linie an.
pub fn add_route(
    state: &mut AppState,
    number: &str,
    name: Option<&str>,
    color: &str,
    line_width: f32,
    line_style: LineStyle,
) {
    use_cases::editing::add_route(state, number, name, color, line_width, line_style);
}

/// Ändert eine Linie.
pub fn update_route(state: &mut AppState, route_id: &str, update: RouteUpdate) {
    use_cases::editing::update_route(state, route_id, update);
}

/// Löscht eine Linie.
pub fn delete_route(state: &mut AppState, route_id: &str) {
    use_cases::editing::delete_route(state, route_id);
}

/// Hängt eine Haltestelle an.
pub fn add_stop(state: &mut AppState, route_id: &str, stop_id: &str) {
    use_cases::editing::add_stop_to_route(state, route_id, stop_id);
}

/// Entfernt eine Haltestelle aus der Linie.
pub fn remove_stop(state: &mut AppState, route_id: &str, stop_id: &str) {
    use_cases::editing::remove_stop_from_route(state, route_id, stop_id);
}

/// Ordnet die Haltestellen einer Linie neu an.
pub fn reorder_stops(state: &mut AppState, route_id: &str, stop_ids: &[String]) {
    use_cases::editing::reorder_route_stops(state, route_id, stop_ids);
}

/// Erzeugt gerade Segmente entlang der Haltestellen-Reihenfolge.
pub fn auto_route(state: &mut AppState, route_id: &str) {
    use_cases::editing::auto_route(state, route_id);
}
