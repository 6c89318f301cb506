//! Use-Case: Bearbeitungsfokus und Wegpunkte eines Segments.

use super::apply_scheme_edit;
use crate::app::AppState;
use crate::core::SegmentRef;

/// Fokussiert ein Segment für die Wegpunkt-Bearbeitung.
pub fn begin_edit_segment(state: &mut AppState, segment: SegmentRef) {
    if state
        .scheme
        .segment(&segment.route_id, &segment.from, &segment.to)
        .is_none()
    {
        log::debug!(
            "Segment {}-{} in Linie {} nicht gefunden, Fokus unverändert",
            segment.from,
            segment.to,
            segment.route_id
        );
        return;
    }

    log::info!(
        "Bearbeite Segment {}-{} (Linie {})",
        segment.from,
        segment.to,
        segment.route_id
    );
    state.editor.edit_focus = Some(segment);
}

/// Hebt den Bearbeitungsfokus auf.
pub fn end_edit_segment(state: &mut AppState) {
    if state.editor.edit_focus.take().is_some() {
        log::info!("Segment-Bearbeitung beendet");
    }
}

/// Ergänzt einen Wegpunkt vor dem Segment-Ende.
pub fn add_segment_point(state: &mut AppState, segment: &SegmentRef) -> Option<usize> {
    let index = apply_scheme_edit(state, "Wegpunkt hinzufügen", |scheme| {
        scheme.add_segment_point(&segment.route_id, &segment.from, &segment.to)
    })?;
    log::info!(
        "Wegpunkt {} in Segment {}-{} eingefügt",
        index + 1,
        segment.from,
        segment.to
    );
    Some(index)
}

/// Löscht einen inneren Wegpunkt.
pub fn delete_segment_point(state: &mut AppState, segment: &SegmentRef, index: usize) {
    if apply_scheme_edit(state, "Wegpunkt löschen", |scheme| {
        scheme.delete_segment_point(&segment.route_id, &segment.from, &segment.to, index)
    })
    .is_some()
    {
        log::info!(
            "Wegpunkt {} aus Segment {}-{} gelöscht",
            index + 1,
            segment.from,
            segment.to
        );
    }
}

/// Setzt einen Wegpunkt auf eine absolute Position (eigener Undo-Schritt).
pub fn move_segment_point(
    state: &mut AppState,
    segment: &SegmentRef,
    index: usize,
    position: glam::Vec2,
) {
    apply_scheme_edit(state, "Wegpunkt verschieben", |scheme| {
        scheme.move_segment_point(
            &segment.route_id,
            &segment.from,
            &segment.to,
            index,
            position,
        )
    });
}
