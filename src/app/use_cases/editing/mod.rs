//! Use-Case-Funktionen für Schema-Mutationen.
//!
//! Aufgeteilt nach Objektart:
//! - `stops`: Haltestellen anlegen, ändern, löschen
//! - `routes`: Linien und ihre Haltestellen-Reihenfolge
//! - `segments`: Bearbeitungsfokus und Wegpunkte

mod routes;
mod segments;
mod stops;

pub use routes::{
    add_route, add_stop_to_route, auto_route, delete_route, remove_stop_from_route,
    reorder_route_stops, update_route,
};
pub use segments::{
    add_segment_point, begin_edit_segment, delete_segment_point, end_edit_segment,
    move_segment_point,
};
pub use stops::{add_stop, add_stop_at_position, delete_selected_stops, delete_stop, update_stop};

use crate::app::history::Snapshot;
use crate::app::interaction::DragState;
use crate::app::AppState;
use crate::core::{EditError, Scheme};

/// Führt eine Schema-Mutation als einen Undo-Schritt aus.
///
/// Bei Erfolg wird der Zustand davor als Snapshot aufgenommen. Bei Fehler
/// bleibt das Schema unverändert und der Fehler wird gemeldet.
pub fn apply_scheme_edit<T>(
    state: &mut AppState,
    action: &str,
    edit: impl FnOnce(&mut Scheme) -> Result<T, EditError>,
) -> Option<T> {
    let before = Snapshot::from_state(state);
    match edit(state.scheme_mut()) {
        Ok(value) => {
            state.history.record_snapshot(before);
            prune_stale_references(state);
            Some(value)
        }
        Err(err) => {
            state.scheme = before.scheme;
            state.report_error(action, &err);
            None
        }
    }
}

/// Entfernt Selektion, Bearbeitungsfokus und Drag-Ziele, die im Schema
/// nicht mehr existieren.
pub fn prune_stale_references(state: &mut AppState) {
    let scheme = &state.scheme;

    if state
        .selection
        .selected_stop_ids
        .iter()
        .any(|id| scheme.stop(id).is_none())
    {
        state.selection.ids_mut().retain(|id| scheme.stop(id).is_some());
    }

    let focus_gone = state
        .editor
        .edit_focus
        .as_ref()
        .is_some_and(|focus| scheme.segment(&focus.route_id, &focus.from, &focus.to).is_none());
    if focus_gone {
        log::debug!("Bearbeitungsfokus aufgehoben: Segment existiert nicht mehr");
        state.editor.edit_focus = None;
    }

    match &mut state.editor.drag {
        DragState::Idle => {}
        DragState::DraggingStops { stop_ids, .. } => {
            stop_ids.retain(|id| scheme.stop(id).is_some());
            if stop_ids.is_empty() {
                state.editor.drag = DragState::Idle;
            }
        }
        DragState::DraggingControlPoint { segment, .. } => {
            if scheme
                .segment(&segment.route_id, &segment.from, &segment.to)
                .is_none()
            {
                state.editor.drag = DragState::Idle;
            }
        }
    }
}
