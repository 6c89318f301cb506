//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeiger-Intents werden hier per Treffer-Test aufgelöst; die Commands
//! tragen danach nur noch konkrete IDs und Positionen.

use super::interaction::{DragState, PointerButton};
use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{find_control_point_near, find_segment_near, find_stop_near, SegmentRef};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            pos,
            button: PointerButton::Primary,
            modifier,
        } => map_primary_press(state, pos, modifier),
        AppIntent::PointerPressed {
            pos,
            button: PointerButton::Secondary,
            ..
        } => match focused_control_point_at(state, pos) {
            Some((segment, index)) if state.editor.drag.is_idle() => {
                vec![AppCommand::DeleteSegmentPoint { segment, index }]
            }
            _ => vec![],
        },
        AppIntent::PointerMoved { pos } => {
            if state.editor.drag.is_idle() {
                vec![]
            } else {
                vec![AppCommand::DragTo { pos }]
            }
        }
        AppIntent::PointerReleased { pos } => {
            if state.editor.drag.is_idle() {
                vec![]
            } else {
                vec![AppCommand::DragTo { pos }, AppCommand::EndDrag]
            }
        }
        AppIntent::NudgeRequested { direction, coarse } => {
            if state.selection.is_empty() {
                return vec![];
            }
            let step = if coarse {
                state.options.nudge_step_coarse
            } else {
                state.options.nudge_step
            };
            vec![
                AppCommand::BeginMoveSelectedStops,
                AppCommand::MoveSelectedStops {
                    delta: direction.delta(step),
                },
            ]
        }
        AppIntent::SetEditorModeRequested { mode } => vec![AppCommand::SetEditorMode { mode }],

        AppIntent::AddStopRequested { name, position } => {
            vec![AppCommand::AddStop { name, position }]
        }
        AppIntent::UpdateStopRequested { stop_id, update } => {
            vec![AppCommand::UpdateStop { stop_id, update }]
        }
        AppIntent::DeleteStopRequested { stop_id } => vec![AppCommand::DeleteStop { stop_id }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedStops],

        AppIntent::AddRouteRequested {
            number,
            name,
            color,
            line_width,
            line_style,
        } => vec![AppCommand::AddRoute {
            number,
            name,
            color: color.unwrap_or_else(|| state.options.route_color(state.route_count())),
            line_width: line_width.unwrap_or(state.options.default_line_width),
            line_style,
        }],
        AppIntent::UpdateRouteRequested { route_id, update } => {
            vec![AppCommand::UpdateRoute { route_id, update }]
        }
        AppIntent::DeleteRouteRequested { route_id } => vec![AppCommand::DeleteRoute { route_id }],
        AppIntent::AddStopToRouteRequested { route_id, stop_id } => {
            vec![AppCommand::AddStopToRoute { route_id, stop_id }]
        }
        AppIntent::RemoveStopFromRouteRequested { route_id, stop_id } => {
            vec![AppCommand::RemoveStopFromRoute { route_id, stop_id }]
        }
        AppIntent::ReorderRouteStopsRequested { route_id, stop_ids } => {
            vec![AppCommand::ReorderRouteStops { route_id, stop_ids }]
        }
        AppIntent::AutoRouteRequested { route_id } => vec![AppCommand::AutoRoute { route_id }],

        AppIntent::BeginEditSegmentRequested { segment } => {
            vec![AppCommand::BeginEditSegment { segment }]
        }
        AppIntent::PickSegmentRequested { pos } => {
            match find_segment_near(pos, state.scheme.segments(), state.options.segment_tolerance) {
                Some((route, segment)) => vec![AppCommand::BeginEditSegment {
                    segment: SegmentRef::new(&route.id, &segment.from, &segment.to),
                }],
                None => vec![AppCommand::EndEditSegment],
            }
        }
        AppIntent::EndEditSegmentRequested => vec![AppCommand::EndEditSegment],
        AppIntent::AddSegmentPointRequested { segment } => {
            vec![AppCommand::AddSegmentPoint { segment }]
        }
        AppIntent::DeleteSegmentPointRequested { segment, index } => {
            vec![AppCommand::DeleteSegmentPoint { segment, index }]
        }
        AppIntent::MoveSegmentPointRequested {
            segment,
            index,
            position,
        } => vec![AppCommand::MoveSegmentPoint {
            segment,
            index,
            position,
        }],

        AppIntent::SelectStopRequested { stop_id, additive } => {
            vec![AppCommand::SelectStop { stop_id, additive }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllStops],
        AppIntent::AlignSelectedRequested { axis } => vec![AppCommand::AlignSelected { axis }],
        AppIntent::MoveSelectedRequested { delta } => vec![
            AppCommand::BeginMoveSelectedStops,
            AppCommand::MoveSelectedStops { delta },
        ],

        AppIntent::NewSchemeRequested => vec![AppCommand::NewScheme],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::ImportRequested { json } => vec![AppCommand::ImportScheme { json }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::ExportPngRequested { path } => vec![AppCommand::ExportPng { path }],
        AppIntent::ExportSvgRequested { path } => vec![AppCommand::ExportSvg { path }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}

/// Primärklick: Wegpunkt des Fokus-Segments vor Haltestelle vor leerer Fläche.
fn map_primary_press(state: &AppState, pos: glam::Vec2, modifier: bool) -> Vec<AppCommand> {
    if !matches!(state.editor.drag, DragState::Idle) {
        return vec![];
    }

    if let Some((segment, index)) = focused_control_point_at(state, pos) {
        return vec![AppCommand::BeginControlPointDrag { segment, index }];
    }

    let hit = find_stop_near(pos, state.scheme.stops(), state.options.stop_hit_radii());
    if let Some(stop) = hit {
        let stop_id = stop.id.clone();
        let selected = state.selection.contains(&stop_id);
        return if modifier {
            let mut commands = vec![AppCommand::SelectStop {
                stop_id: stop_id.clone(),
                additive: true,
            }];
            // Abgewählte Haltestellen werden nicht gezogen
            if !selected {
                commands.push(AppCommand::BeginStopDrag { stop_id, pos });
            }
            commands
        } else if selected {
            vec![AppCommand::BeginStopDrag { stop_id, pos }]
        } else {
            vec![
                AppCommand::SelectStop {
                    stop_id: stop_id.clone(),
                    additive: false,
                },
                AppCommand::BeginStopDrag { stop_id, pos },
            ]
        };
    }

    match state.editor.mode {
        EditorMode::AddStop => vec![AppCommand::AddStopAtPosition { position: pos }],
        EditorMode::Select => vec![AppCommand::ClearSelection],
    }
}

/// Wegpunkt des fokussierten Segments unter dem Zeiger.
fn focused_control_point_at(state: &AppState, pos: glam::Vec2) -> Option<(SegmentRef, usize)> {
    let focus = state.editor.edit_focus.as_ref()?;
    let segment = state.scheme.segment(&focus.route_id, &focus.from, &focus.to)?;
    let index = find_control_point_near(pos, segment, state.options.control_point_tolerance)?;
    Some((focus.clone(), index))
}

#[cfg(test)]
mod tests;
