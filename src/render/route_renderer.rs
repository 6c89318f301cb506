//! Linien-Renderer mit Parallelversatz auf gemeinsamen Strecken.
//!
//! Segmente werden nach ungeordnetem Endpunkt-Paar gruppiert. Der Index
//! innerhalb einer Gruppe ergibt sich aus der Zeichenreihenfolge (Linien in
//! Sammlungsreihenfolge, Segmente in Linienreihenfolge). Der Versatz bezieht
//! sich auf die kanonische Orientierung der Gruppe, damit Linien in
//! Gegenrichtung auf der passenden Seite liegen.

use std::collections::HashMap;

use super::types::{parse_hex_color, DrawCommand, Frame, Stroke};
use crate::core::geometry::{offset_polyline, parallel_offset};
use crate::core::{LineStyle, Route, Scheme, Segment};
use crate::shared::EditorOptions;

/// Versatz jedes Segments in Zeichenreihenfolge.
pub(crate) fn segment_offsets<'a>(
    scheme: &'a Scheme,
    spacing: f32,
) -> Vec<(&'a Route, &'a Segment, f32)> {
    let mut group_sizes: HashMap<(String, String), usize> = HashMap::new();
    for (_, segment) in scheme.segments() {
        *group_sizes.entry(segment.key().unordered()).or_default() += 1;
    }

    let mut next_index: HashMap<(String, String), usize> = HashMap::new();
    scheme
        .segments()
        .map(|(route, segment)| {
            let key = segment.key();
            let group = key.unordered();
            let size = group_sizes.get(&group).copied().unwrap_or(1);
            let index = next_index.entry(group).or_default();
            let mut offset = parallel_offset(*index, size, spacing);
            *index += 1;
            if key.is_reversed() {
                offset = -offset;
            }
            (route, segment, offset)
        })
        .collect()
}

/// Zeichnet alle Segmente aller Linien.
pub(crate) fn render_routes(frame: &mut Frame, scheme: &Scheme, options: &EditorOptions) {
    for (route, segment, offset) in segment_offsets(scheme, options.parallel_spacing) {
        let stroke = Stroke {
            color: parse_hex_color(&route.color).unwrap_or(options.stop_stroke_color),
            width: route.line_width,
            dash: match route.line_style {
                LineStyle::Solid => None,
                LineStyle::Dashed => Some(options.dash_pattern),
            },
        };
        frame.push(DrawCommand::Polyline {
            points: offset_polyline(&segment.points, offset),
            stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Stop;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn scheme_with_routes(orders: &[(&str, &[&str])]) -> Scheme {
        let mut scheme = Scheme::new();
        scheme.add_stop("A", Some(Vec2::new(0.0, 0.0))).expect("A");
        scheme.add_stop("B", Some(Vec2::new(100.0, 0.0))).expect("B");
        for (id, stops) in orders {
            scheme
                .add_route_with_id(id, id, None, "#2563eb", 4.0, LineStyle::Solid)
                .expect("Linie anlegen");
            for stop in *stops {
                scheme.add_stop_to_route(id, stop).expect("Haltestelle anhängen");
            }
        }
        scheme
    }

    #[test]
    fn three_shared_segments_are_symmetric() {
        let scheme = scheme_with_routes(&[
            ("r1", &["001", "002"]),
            ("r2", &["001", "002"]),
            ("r3", &["001", "002"]),
        ]);
        let offsets: Vec<f32> = segment_offsets(&scheme, 8.0)
            .into_iter()
            .map(|(_, _, offset)| offset)
            .collect();
        assert_eq!(offsets.len(), 3);
        assert_relative_eq!(offsets[0], -8.0);
        assert_relative_eq!(offsets[1], 0.0);
        assert_relative_eq!(offsets[2], 8.0);
    }

    #[test]
    fn opposite_directions_land_on_opposite_sides() {
        let scheme = scheme_with_routes(&[("r1", &["001", "002"]), ("r2", &["002", "001"])]);
        let mut frame = Frame::new(200.0, 200.0);
        render_routes(&mut frame, &scheme, &EditorOptions::default());

        let ys: Vec<f32> = frame
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Polyline { points, .. } => Some(points[0].y),
                _ => None,
            })
            .collect();
        assert_eq!(ys.len(), 2);
        assert_relative_eq!(ys[0], -ys[1]);
        assert!(ys[0].abs() > 0.0);
    }

    #[test]
    fn ids_with_separator_do_not_share_a_group() {
        let stops = [
            ("1-2", Vec2::new(0.0, 0.0)),
            ("3", Vec2::new(100.0, 0.0)),
            ("1", Vec2::new(0.0, 50.0)),
            ("2-3", Vec2::new(100.0, 50.0)),
        ]
        .into_iter()
        .map(|(id, pos)| Stop::new(id, id, pos))
        .collect();
        let mut scheme = Scheme::from_parts(stops, Vec::new()).expect("Schema aufbauen");
        for (route_id, a, b) in [("r1", "1-2", "3"), ("r2", "1", "2-3")] {
            scheme
                .add_route_with_id(route_id, route_id, None, "#2563eb", 4.0, LineStyle::Solid)
                .expect("Linie anlegen");
            scheme.add_stop_to_route(route_id, a).expect("Start anhängen");
            scheme.add_stop_to_route(route_id, b).expect("Ziel anhängen");
        }

        let offsets = segment_offsets(&scheme, 8.0);
        assert_eq!(offsets.len(), 2);
        assert!(offsets.iter().all(|(_, _, offset)| *offset == 0.0));
    }

    #[test]
    fn single_segment_is_not_offset() {
        let scheme = scheme_with_routes(&[("r1", &["001", "002"])]);
        let offsets = segment_offsets(&scheme, 8.0);
        assert_relative_eq!(offsets[0].2, 0.0);
    }
}
