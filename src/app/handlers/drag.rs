//! Handler für Zeiger-Drags.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SegmentRef;

/// Beginnt einen Haltestellen-Drag.
pub fn begin_stop_drag(state: &mut AppState, stop_id: &str, pos: glam::Vec2) {
    use_cases::drag::begin_stop_drag(state, stop_id, pos);
}

/// Beginnt einen Wegpunkt-Drag.
pub fn begin_control_point_drag(state: &mut AppState, segment: SegmentRef, index: usize) {
    use_cases::drag::begin_control_point_drag(state, segment, index);
}

/// Setzt den laufenden Drag fort.
pub fn drag_to(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::drag_to(state, pos);
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
