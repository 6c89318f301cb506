//! Serialisierung eines Frames als SVG-Dokument.

use std::fmt::Write;

use super::types::{to_hex_color, DrawCommand, Frame, Rgba, Stroke, TextAnchor};

/// Schriftfamilie für Beschriftungen.
const FONT_FAMILY: &str = "Inter, sans-serif";

/// Erzeugt ein eigenständiges SVG-Dokument aus dem Frame.
pub fn to_svg(frame: &Frame) -> String {
    let mut svg = String::new();
    // `write!` auf String kann nicht fehlschlagen
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
        w = frame.width,
        h = frame.height,
    );

    for command in &frame.commands {
        let _ = match command {
            DrawCommand::Rect { min, size, fill } => writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
                min.x,
                min.y,
                size.x,
                size.y,
                fill_attrs(*fill)
            ),
            DrawCommand::Line { from, to, stroke } => writeln!(
                svg,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(stroke)
            ),
            DrawCommand::Polyline { points, stroke } => {
                let coords: Vec<String> =
                    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                writeln!(
                    svg,
                    r#"  <polyline points="{}" fill="none" stroke-linecap="round" stroke-linejoin="round"{}/>"#,
                    coords.join(" "),
                    stroke_attrs(stroke)
                )
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{}"{}{}/>"#,
                center.x,
                center.y,
                radius,
                fill.map_or_else(|| r#" fill="none""#.to_string(), fill_attrs),
                stroke.as_ref().map(stroke_attrs).unwrap_or_default()
            ),
            DrawCommand::Text {
                position,
                text,
                font_size,
                bold,
                color,
                anchor,
            } => writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="{}"{} text-anchor="{}" dominant-baseline="central"{}>{}</text>"#,
                position.x,
                position.y,
                font_size,
                if *bold { r#" font-weight="bold""# } else { "" },
                anchor_attr(*anchor),
                fill_attrs(*color),
                escape_xml(text)
            ),
        };
    }

    svg.push_str("</svg>\n");
    svg
}

fn fill_attrs(color: Rgba) -> String {
    let mut attrs = format!(r#" fill="{}""#, to_hex_color(color));
    if color[3] < 1.0 {
        let _ = write!(attrs, r#" fill-opacity="{}""#, color[3]);
    }
    attrs
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        to_hex_color(stroke.color),
        stroke.width
    );
    if stroke.color[3] < 1.0 {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, stroke.color[3]);
    }
    if let Some([dash, gap]) = stroke.dash {
        let _ = write!(attrs, r#" stroke-dasharray="{dash} {gap}""#);
    }
    attrs
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Maskiert XML-Sonderzeichen und verwirft Zeichen außerhalb von XML 1.0
/// `Char` (Steuerzeichen außer Tab, LF, CR sowie U+FFFE/U+FFFF).
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\t' | '\n' | '\r' => escaped.push(ch),
            c if c < ' ' || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn dashed_polyline_carries_dasharray() {
        let mut frame = Frame::new(10.0, 10.0);
        frame.push(DrawCommand::Polyline {
            points: vec![Vec2::ZERO, Vec2::new(5.0, 5.0)],
            stroke: Stroke {
                color: [1.0, 0.0, 0.0, 1.0],
                width: 4.0,
                dash: Some([10.0, 5.0]),
            },
        });

        let svg = to_svg(&frame);
        assert!(svg.contains(r#"points="0,0 5,5""#));
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"stroke-dasharray="10 5""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut frame = Frame::new(10.0, 10.0);
        frame.push(DrawCommand::Text {
            position: Vec2::ZERO,
            text: "Markt & <Bahnhof>".to_string(),
            font_size: 13.0,
            bold: false,
            color: [0.0, 0.0, 0.0, 1.0],
            anchor: TextAnchor::End,
        });

        let svg = to_svg(&frame);
        assert!(svg.contains("Markt &amp; &lt;Bahnhof&gt;"));
        assert!(svg.contains(r#"text-anchor="end""#));
    }

    #[test]
    fn control_characters_are_dropped_from_text() {
        assert_eq!(escape_xml("A\u{1}B\u{1F}C"), "ABC");
        assert_eq!(escape_xml("Zeile\tA\u{FFFF}"), "Zeile\tA");
    }
}
