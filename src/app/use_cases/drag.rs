//! Use-Case: Zeiger-Drags von Haltestellen und Wegpunkten.
//!
//! Ein Drag ist ein Undo-Schritt: Der Snapshot entsteht beim Start, jede
//! Zeigerbewegung ist danach eine vollständige, invariantenerhaltende Mutation.

use glam::Vec2;

use crate::app::interaction::DragState;
use crate::app::notifications::Notification;
use crate::app::AppState;
use crate::core::SegmentRef;

/// Startet das Ziehen einer Haltestelle.
///
/// Ist sie selektiert, bewegt sich die gesamte Selektion mit, sonst nur sie.
pub fn begin_stop_drag(state: &mut AppState, stop_id: &str, pos: Vec2) {
    if state.scheme.stop(stop_id).is_none() {
        log::debug!("Drag ignoriert: Haltestelle {} existiert nicht", stop_id);
        return;
    }

    let stop_ids: Vec<String> = if state.selection.contains(stop_id) {
        state.selection.selected_stop_ids.iter().cloned().collect()
    } else {
        vec![stop_id.to_string()]
    };

    state.record_undo_snapshot();
    log::debug!("Drag gestartet: {} Haltestelle(n)", stop_ids.len());
    state.editor.drag = DragState::DraggingStops {
        stop_ids,
        last_pos: pos,
    };
}

/// Startet das Ziehen eines Wegpunkts im fokussierten Segment.
pub fn begin_control_point_drag(state: &mut AppState, segment: SegmentRef, index: usize) {
    let exists = state
        .scheme
        .segment(&segment.route_id, &segment.from, &segment.to)
        .is_some_and(|s| index < s.points.len());
    if !exists {
        log::debug!(
            "Drag ignoriert: Wegpunkt {} in {}-{} existiert nicht",
            index,
            segment.from,
            segment.to
        );
        return;
    }

    state.record_undo_snapshot();
    log::debug!(
        "Wegpunkt-Drag gestartet: {}-{} #{}",
        segment.from,
        segment.to,
        index + 1
    );
    state.editor.drag = DragState::DraggingControlPoint { segment, index };
}

/// Verarbeitet eine Zeigerbewegung während eines Drags.
///
/// Haltestellen bewegen sich um die Differenz zur letzten Position, ein
/// Wegpunkt springt auf die absolute Zeigerposition.
pub fn drag_to(state: &mut AppState, pos: Vec2) {
    if state.editor.drag.is_idle() {
        return;
    }
    let scheme = std::sync::Arc::make_mut(&mut state.scheme);
    match &mut state.editor.drag {
        DragState::Idle => {}
        DragState::DraggingStops { stop_ids, last_pos } => {
            let delta = pos - *last_pos;
            *last_pos = pos;
            if delta != Vec2::ZERO {
                scheme.move_stops(stop_ids.iter(), delta);
            }
        }
        DragState::DraggingControlPoint { segment, index } => {
            if let Err(err) = scheme.move_segment_point(
                &segment.route_id,
                &segment.from,
                &segment.to,
                *index,
                pos,
            ) {
                log::debug!("Wegpunkt-Drag abgebrochen: {}", err);
                state.editor.drag = DragState::Idle;
            }
        }
    }
}

/// Beendet den laufenden Drag.
///
/// Für Wegpunkte wird die finale Position als `SegmentPointCommitted`
/// gemeldet.
pub fn end_drag(state: &mut AppState) {
    match std::mem::take(&mut state.editor.drag) {
        DragState::Idle => {}
        DragState::DraggingStops { stop_ids, .. } => {
            log::info!("{} Haltestelle(n) verschoben", stop_ids.len());
        }
        DragState::DraggingControlPoint { segment, index } => {
            let position = state
                .scheme
                .segment(&segment.route_id, &segment.from, &segment.to)
                .and_then(|s| s.points.get(index).copied());
            if let Some(position) = position {
                log::info!(
                    "Wegpunkt {} in {}-{} auf ({:.1}, {:.1}) gesetzt",
                    index + 1,
                    segment.from,
                    segment.to,
                    position.x,
                    position.y
                );
                state.notify(Notification::SegmentPointCommitted {
                    segment,
                    index,
                    position,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LineStyle;

    fn state_with_route() -> AppState {
        let mut state = AppState::new();
        let scheme = state.scheme_mut();
        scheme
            .add_stop("A", Some(Vec2::new(0.0, 0.0)))
            .expect("Haltestelle A");
        scheme
            .add_stop("B", Some(Vec2::new(100.0, 0.0)))
            .expect("Haltestelle B");
        scheme
            .add_route_with_id("r1", "1", None, "#ff0000", 4.0, LineStyle::Solid)
            .expect("Linie anlegen");
        scheme.add_stop_to_route("r1", "001").expect("A anhängen");
        scheme.add_stop_to_route("r1", "002").expect("B anhängen");
        state
    }

    #[test]
    fn unselected_stop_drags_alone() {
        let mut state = state_with_route();
        state.selection.replace_with("002");

        begin_stop_drag(&mut state, "001", Vec2::ZERO);
        drag_to(&mut state, Vec2::new(5.0, 5.0));
        end_drag(&mut state);

        assert_eq!(state.scheme.stop_position("001"), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(
            state.scheme.stop_position("002"),
            Some(Vec2::new(100.0, 0.0))
        );
        assert!(state.editor.drag.is_idle());
    }

    #[test]
    fn drag_moves_segment_endpoint_incrementally() {
        let mut state = state_with_route();
        begin_stop_drag(&mut state, "002", Vec2::new(100.0, 0.0));
        drag_to(&mut state, Vec2::new(110.0, 0.0));
        drag_to(&mut state, Vec2::new(110.0, 20.0));

        let segment = state.scheme.segment("r1", "001", "002").expect("Segment");
        assert_eq!(segment.points[1], Vec2::new(110.0, 20.0));
    }

    #[test]
    fn control_point_drag_commits_final_position() {
        let mut state = state_with_route();
        let segment = SegmentRef::new("r1", "001", "002");
        state
            .scheme_mut()
            .add_segment_point("r1", "001", "002")
            .expect("Wegpunkt");

        begin_control_point_drag(&mut state, segment.clone(), 1);
        drag_to(&mut state, Vec2::new(50.0, 40.0));
        end_drag(&mut state);

        assert_eq!(
            state.take_notifications(),
            vec![Notification::SegmentPointCommitted {
                segment,
                index: 1,
                position: Vec2::new(50.0, 40.0),
            }]
        );
    }

    #[test]
    fn drag_is_one_undo_step() {
        let mut state = state_with_route();
        begin_stop_drag(&mut state, "001", Vec2::ZERO);
        drag_to(&mut state, Vec2::new(1.0, 0.0));
        drag_to(&mut state, Vec2::new(2.0, 0.0));
        end_drag(&mut state);

        crate::app::handlers::history::undo(&mut state);
        assert_eq!(state.scheme.stop_position("001"), Some(Vec2::ZERO));
        assert!(!state.can_undo());
    }
}
