//! Handler für Undo/Redo.
//!
//! Nach jedem Wechsel wird ein laufender Drag verworfen und die Selektion
//! bzw. der Bearbeitungsfokus gegen das wiederhergestellte Schema geprüft.

use crate::app::history::Snapshot;
use crate::app::interaction::DragState;
use crate::app::use_cases::editing::prune_stale_references;
use crate::app::AppState;

/// Macht den letzten Editor-Schritt rückgängig.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let restored = state.history.pop_undo_with_current(current);
    restore(state, restored, "Undo");
}

/// Stellt den zuletzt rückgängig gemachten Schritt wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let restored = state.history.pop_redo_with_current(current);
    restore(state, restored, "Redo");
}

fn restore(state: &mut AppState, snapshot: Option<Snapshot>, action: &str) {
    let Some(snapshot) = snapshot else {
        log::debug!("{}: Stack leer", action);
        return;
    };

    snapshot.apply_to(state);
    state.editor.drag = DragState::Idle;
    prune_stale_references(state);
    log::info!(
        "{}: {} Haltestellen, {} Linien",
        action,
        state.stop_count(),
        state.route_count()
    );
}
