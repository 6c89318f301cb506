//! Haltestellen-Renderer: Markierung, Endhaltestellen-Punkt, Beschriftung.

use glam::Vec2;

use super::types::{DrawCommand, Frame, Stroke, TextAnchor};
use crate::core::{LabelPosition, Stop};
use crate::shared::{EditorOptions, RenderScene};

/// Zeichnet alle Haltestellen in Sammlungsreihenfolge.
pub(crate) fn render_stops(frame: &mut Frame, scene: &RenderScene) {
    let options = &scene.options;
    for stop in scene.scheme.stops() {
        let selected = scene.is_selected(&stop.id);
        let stroke = if selected {
            Stroke::solid(
                options.stop_stroke_color_selected,
                options.stop_stroke_width_selected,
            )
        } else {
            Stroke::solid(options.stop_stroke_color, options.stop_stroke_width)
        };

        frame.push(DrawCommand::Circle {
            center: stop.position,
            radius: stop.marker_radius(options.stop_radius, options.terminal_radius),
            fill: Some(options.stop_fill_color),
            stroke: Some(stroke),
        });

        if stop.is_terminal {
            frame.push(DrawCommand::Circle {
                center: stop.position,
                radius: options.terminal_dot_radius,
                fill: Some(options.stop_stroke_color),
                stroke: None,
            });
        }

        let (position, anchor) = label_placement(stop, options);
        frame.push(DrawCommand::Text {
            position,
            text: stop.name.clone(),
            font_size: options.label_font_size,
            bold: false,
            color: options.stop_stroke_color,
            anchor,
        });
    }
}

/// Ankerpunkt und Ausrichtung des Namens.
pub(crate) fn label_placement(stop: &Stop, options: &EditorOptions) -> (Vec2, TextAnchor) {
    let p = stop.position;
    match stop.label_position {
        LabelPosition::Top => (Vec2::new(p.x, p.y - options.label_offset), TextAnchor::Middle),
        LabelPosition::Bottom => (
            Vec2::new(p.x, p.y + options.label_offset_below),
            TextAnchor::Middle,
        ),
        LabelPosition::Left => (Vec2::new(p.x - options.label_offset, p.y), TextAnchor::End),
        LabelPosition::Right => (Vec2::new(p.x + options.label_offset, p.y), TextAnchor::Start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_positions_follow_side() {
        let options = EditorOptions::default();
        let mut stop = Stop::new("001", "Markt", Vec2::new(100.0, 100.0));

        let cases = [
            (LabelPosition::Top, Vec2::new(100.0, 84.0), TextAnchor::Middle),
            (LabelPosition::Bottom, Vec2::new(100.0, 124.0), TextAnchor::Middle),
            (LabelPosition::Left, Vec2::new(84.0, 100.0), TextAnchor::End),
            (LabelPosition::Right, Vec2::new(116.0, 100.0), TextAnchor::Start),
        ];
        for (side, expected_pos, expected_anchor) in cases {
            stop.label_position = side;
            assert_eq!(label_placement(&stop, &options), (expected_pos, expected_anchor));
        }
    }
}
