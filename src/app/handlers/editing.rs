//! Handler für Haltestellen-Editing und Editor-Modus.

use crate::app::state::EditorMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::StopUpdate;

/// Wechselt den Editor-Modus.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    state.editor.mode = mode;
    log::info!("Editor-Modus: {:?}", mode);
}

/// Legt eine Haltestelle mit Namen an.
pub fn add_stop(state: &mut AppState, name: &str, position: Option<glam::Vec2>) {
    use_cases::editing::add_stop(state, name, position);
}

/// Legt per Klick eine Haltestelle an.
pub fn add_stop_at_position(state: &mut AppState, position: glam::Vec2) {
    use_cases::editing::add_stop_at_position(state, position);
}

/// Ändert eine Haltestelle.
pub fn update_stop(state: &mut AppState, stop_id: &str, update: StopUpdate) {
    use_cases::editing::update_stop(state, stop_id, update);
}

/// Löscht eine Haltestelle.
pub fn delete_stop(state: &mut AppState, stop_id: &str) {
    use_cases::editing::delete_stop(state, stop_id);
}

/// Löscht alle aktuell selektierten Haltestellen.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_stops(state);
}
