//! Wegpunkt-Markierungen des Segments im Bearbeitungsmodus.

use super::types::{DrawCommand, Frame, Stroke, TextAnchor};
use crate::core::{Scheme, SegmentRef};
use crate::shared::EditorOptions;

const OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Zeichnet die Wegpunkte des fokussierten Segments, 1-basiert nummeriert.
pub(crate) fn render_control_points(
    frame: &mut Frame,
    scheme: &Scheme,
    focus: Option<&SegmentRef>,
    options: &EditorOptions,
) {
    let Some(segment) =
        focus.and_then(|focus| scheme.segment(&focus.route_id, &focus.from, &focus.to))
    else {
        return;
    };

    for (i, point) in segment.points.iter().enumerate() {
        frame.push(DrawCommand::Circle {
            center: *point,
            radius: options.control_point_radius,
            fill: Some(options.control_point_color),
            stroke: Some(Stroke::solid(
                OUTLINE_COLOR,
                options.control_point_outline_width,
            )),
        });
        frame.push(DrawCommand::Text {
            position: *point,
            text: (i + 1).to_string(),
            font_size: options.control_point_font_size,
            bold: true,
            color: OUTLINE_COLOR,
            anchor: TextAnchor::Middle,
        });
    }
}
