//! Handler für Selektions-Operationen.
//!
//! Reine Selektionswechsel sind keine eigenen Undo-Schritte; die Selektion
//! wird aber in jedem Snapshot mitgesichert.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::AlignAxis;

/// Selektiert eine Haltestelle (ersetzend oder umschaltend).
pub fn select_stop(state: &mut AppState, stop_id: &str, additive: bool) {
    use_cases::selection::select_stop(state, stop_id, additive);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Selektiert alle Haltestellen.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}

/// Richtet die Selektion aus.
pub fn align(state: &mut AppState, axis: AlignAxis) {
    use_cases::selection::align_selected(state, axis);
}

/// Startet einen Move-Lifecycle (nimmt Undo-Snapshot auf).
pub fn begin_move(state: &mut AppState) {
    state.record_undo_snapshot();
}

/// Verschiebt alle selektierten Haltestellen um ein Delta.
pub fn move_selected(state: &mut AppState, delta: glam::Vec2) {
    let moved = use_cases::selection::move_selected_stops(state, delta);
    log::debug!("{} Haltestellen um ({}, {}) verschoben", moved, delta.x, delta.y);
}
