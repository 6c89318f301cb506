//! Handler für Segment-Bearbeitung (Fokus und Wegpunkte).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SegmentRef;

/// Setzt den Bearbeitungsfokus.
pub fn begin_edit(state: &mut AppState, segment: SegmentRef) {
    use_cases::editing::begin_edit_segment(state, segment);
}

/// Hebt den Bearbeitungsfokus auf.
pub fn end_edit(state: &mut AppState) {
    use_cases::editing::end_edit_segment(state);
}

/// Ergänzt einen Wegpunkt.
pub fn add_point(state: &mut AppState, segment: &SegmentRef) {
    use_cases::editing::add_segment_point(state, segment);
}

/// Löscht einen Wegpunkt.
pub fn delete_point(state: &mut AppState, segment: &SegmentRef, index: usize) {
    use_cases::editing::delete_segment_point(state, segment, index);
}

/// Setzt einen Wegpunkt auf eine absolute Position.
pub fn move_point(state: &mut AppState, segment: &SegmentRef, index: usize, position: glam::Vec2) {
    use_cases::editing::move_segment_point(state, segment, index, position);
}
