use crate::app::interaction::{DragState, NudgeDirection, PointerButton};
use crate::app::{AppCommand, AppIntent, AppState, EditorMode};
use crate::core::{LineStyle, SegmentRef};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_stops() -> AppState {
    let mut state = AppState::new();
    let scheme = state.scheme_mut();
    scheme
        .add_stop("A", Some(Vec2::new(100.0, 100.0)))
        .expect("Haltestelle A");
    scheme
        .add_stop("B", Some(Vec2::new(200.0, 100.0)))
        .expect("Haltestelle B");
    state
}

fn press(pos: Vec2, modifier: bool) -> AppIntent {
    AppIntent::PointerPressed {
        pos,
        button: PointerButton::Primary,
        modifier,
    }
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn press_on_unselected_stop_replaces_selection_then_drags() {
    let state = state_with_stops();

    let commands = map_intent_to_commands(&state, press(Vec2::new(103.0, 100.0), false));

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        &commands[0],
        AppCommand::SelectStop { stop_id, additive: false } if stop_id == "001"
    ));
    assert!(matches!(
        &commands[1],
        AppCommand::BeginStopDrag { stop_id, .. } if stop_id == "001"
    ));
}

#[test]
fn press_on_selected_stop_keeps_selection() {
    let mut state = state_with_stops();
    state.selection.ids_mut().insert("001".into());
    state.selection.ids_mut().insert("002".into());

    let commands = map_intent_to_commands(&state, press(Vec2::new(200.0, 100.0), false));

    assert_eq!(commands.len(), 1);
    assert!(matches!(&commands[0], AppCommand::BeginStopDrag { .. }));
}

#[test]
fn modifier_press_on_selected_stop_only_toggles() {
    let mut state = state_with_stops();
    state.selection.ids_mut().insert("001".into());

    let commands = map_intent_to_commands(&state, press(Vec2::new(100.0, 100.0), true));

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::SelectStop { additive: true, .. }
    ));
}

#[test]
fn empty_press_depends_on_mode() {
    let mut state = state_with_stops();
    let empty = Vec2::new(500.0, 500.0);

    let commands = map_intent_to_commands(&state, press(empty, false));
    assert!(matches!(commands.as_slice(), [AppCommand::ClearSelection]));

    state.editor.mode = EditorMode::AddStop;
    let commands = map_intent_to_commands(&state, press(empty, false));
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::AddStopAtPosition { position }] if *position == empty
    ));
}

#[test]
fn focused_control_point_wins_over_stop() {
    let mut state = state_with_stops();
    let scheme = state.scheme_mut();
    scheme
        .add_route_with_id("r1", "1", None, "#ff0000", 4.0, LineStyle::Solid)
        .expect("Linie anlegen");
    scheme.add_stop_to_route("r1", "001").expect("A anhängen");
    scheme.add_stop_to_route("r1", "002").expect("B anhängen");
    state.editor.edit_focus = Some(SegmentRef::new("r1", "001", "002"));

    let commands = map_intent_to_commands(&state, press(Vec2::new(100.0, 100.0), false));

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::BeginControlPointDrag { index: 0, .. }]
    ));
}

#[test]
fn press_during_drag_is_ignored() {
    let mut state = state_with_stops();
    state.editor.drag = DragState::DraggingStops {
        stop_ids: vec!["001".into()],
        last_pos: Vec2::ZERO,
    };

    let commands = map_intent_to_commands(&state, press(Vec2::new(200.0, 100.0), false));
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            pos: Vec2::new(1.0, 1.0),
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::DragTo { .. }, AppCommand::EndDrag]
    ));
}

#[test]
fn move_without_drag_maps_to_nothing() {
    let state = state_with_stops();
    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { pos: Vec2::ONE });
    assert!(commands.is_empty());
}

#[test]
fn nudge_uses_fine_and_coarse_steps() {
    let mut state = state_with_stops();
    let nudge = |coarse| AppIntent::NudgeRequested {
        direction: NudgeDirection::Up,
        coarse,
    };
    assert!(map_intent_to_commands(&state, nudge(false)).is_empty());

    state.selection.ids_mut().insert("001".into());
    let commands = map_intent_to_commands(&state, nudge(false));
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::BeginMoveSelectedStops, AppCommand::MoveSelectedStops { delta }]
            if *delta == Vec2::new(0.0, -1.0)
    ));

    let commands = map_intent_to_commands(&state, nudge(true));
    assert!(matches!(
        commands.as_slice(),
        [_, AppCommand::MoveSelectedStops { delta }] if *delta == Vec2::new(0.0, -10.0)
    ));
}

#[test]
fn add_route_fills_palette_defaults() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddRouteRequested {
            number: "5".into(),
            name: None,
            color: None,
            line_width: None,
            line_style: LineStyle::Solid,
        },
    );

    let [AppCommand::AddRoute {
        color, line_width, ..
    }] = commands.as_slice()
    else {
        panic!("AddRoute erwartet, erhalten: {commands:?}");
    };
    assert_eq!(color, &state.options.route_color(0));
    assert_eq!(*line_width, state.options.default_line_width);
}

#[test]
fn pick_segment_focuses_hit_or_clears() {
    let mut state = state_with_stops();
    let scheme = state.scheme_mut();
    scheme
        .add_route_with_id("r1", "1", None, "#ff0000", 4.0, LineStyle::Solid)
        .expect("Linie anlegen");
    scheme.add_stop_to_route("r1", "001").expect("A anhängen");
    scheme.add_stop_to_route("r1", "002").expect("B anhängen");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PickSegmentRequested {
            pos: Vec2::new(150.0, 106.0),
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::BeginEditSegment { segment }]
            if *segment == SegmentRef::new("r1", "001", "002")
    ));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PickSegmentRequested {
            pos: Vec2::new(150.0, 300.0),
        },
    );
    assert!(matches!(commands.as_slice(), [AppCommand::EndEditSegment]));
}

#[test]
fn secondary_press_targets_focused_waypoint_only_when_idle() {
    let mut state = state_with_stops();
    let scheme = state.scheme_mut();
    scheme
        .add_route_with_id("r1", "1", None, "#ff0000", 4.0, LineStyle::Solid)
        .expect("Linie anlegen");
    scheme.add_stop_to_route("r1", "001").expect("A anhängen");
    scheme.add_stop_to_route("r1", "002").expect("B anhängen");
    scheme
        .add_segment_point("r1", "001", "002")
        .expect("Wegpunkt anlegen");
    let segment = SegmentRef::new("r1", "001", "002");
    let right_click = AppIntent::PointerPressed {
        pos: Vec2::new(150.0, 102.0),
        button: PointerButton::Secondary,
        modifier: false,
    };

    assert!(map_intent_to_commands(&state, right_click.clone()).is_empty());

    state.editor.edit_focus = Some(segment.clone());
    let commands = map_intent_to_commands(&state, right_click.clone());
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::DeleteSegmentPoint { segment: s, index: 1 }] if *s == segment
    ));

    state.editor.drag = DragState::DraggingControlPoint { segment, index: 1 };
    assert!(map_intent_to_commands(&state, right_click).is_empty());
}
