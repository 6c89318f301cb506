//! Rendering-Typen: Display-Liste eines Frames.

use glam::Vec2;

/// RGBA-Farbe mit Komponenten in `0.0..=1.0`.
pub type Rgba = [f32; 4];

/// Linienstil eines Strichs.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Farbe
    pub color: Rgba,
    /// Strichstärke
    pub width: f32,
    /// Strichmuster (Strich, Lücke), `None` = durchgezogen
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    /// Durchgezogener Strich.
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

/// Horizontale Ausrichtung von Text relativ zum Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text beginnt am Anker (links ausgerichtet)
    Start,
    /// Text zentriert
    Middle,
    /// Text endet am Anker (rechts ausgerichtet)
    End,
}

/// Ein Zeichenbefehl. Reihenfolge in `Frame::commands` = Zeichenreihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gefülltes Rechteck
    Rect {
        /// Linke obere Ecke
        min: Vec2,
        /// Breite/Höhe
        size: Vec2,
        /// Füllfarbe
        fill: Rgba,
    },
    /// Gerade Linie
    Line {
        /// Start
        from: Vec2,
        /// Ende
        to: Vec2,
        /// Strich
        stroke: Stroke,
    },
    /// Offene Polylinie mit runden Enden und Ecken
    Polyline {
        /// Punkte
        points: Vec<Vec2>,
        /// Strich
        stroke: Stroke,
    },
    /// Kreis
    Circle {
        /// Mittelpunkt
        center: Vec2,
        /// Radius
        radius: f32,
        /// Füllfarbe
        fill: Option<Rgba>,
        /// Umrandung
        stroke: Option<Stroke>,
    },
    /// Einzeiliger Text, vertikal mittig am Anker
    Text {
        /// Ankerpunkt
        position: Vec2,
        /// Inhalt
        text: String,
        /// Schriftgröße
        font_size: f32,
        /// Fett
        bold: bool,
        /// Textfarbe
        color: Rgba,
        /// Horizontale Ausrichtung
        anchor: TextAnchor,
    },
}

/// Vollständige Display-Liste eines Frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Breite der Zeichenfläche
    pub width: f32,
    /// Höhe der Zeichenfläche
    pub height: f32,
    /// Zeichenbefehle in Zeichenreihenfolge
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Leerer Frame der gegebenen Größe.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Hängt einen Zeichenbefehl an.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Parst `#rgb`, `#rrggbb` oder `#rrggbbaa`.
pub fn parse_hex_color(value: &str) -> Option<Rgba> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

    match hex.len() {
        3 => {
            let mut rgba = [1.0; 4];
            for (i, c) in hex.chars().enumerate() {
                rgba[i] = channel(&format!("{c}{c}"))?;
            }
            Some(rgba)
        }
        6 | 8 => {
            let mut rgba = [1.0; 4];
            for i in 0..hex.len() / 2 {
                rgba[i] = channel(&hex[i * 2..i * 2 + 2])?;
            }
            Some(rgba)
        }
        _ => None,
    }
}

/// Formatiert eine Farbe als `#rrggbb` (ohne Alpha).
pub fn to_hex_color(color: Rgba) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        byte(color[0]),
        byte(color[1]),
        byte(color[2])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_short_and_long_hex() {
        let short = parse_hex_color("#f00").expect("kurze Form");
        let long = parse_hex_color("#FF0000").expect("lange Form");
        assert_eq!(short, long);
        assert_relative_eq!(long[0], 1.0);
        assert_relative_eq!(long[3], 1.0);

        let alpha = parse_hex_color("#00000080").expect("mit Alpha");
        assert_relative_eq!(alpha[3], 128.0 / 255.0);
    }

    #[test]
    fn rejects_invalid_colors() {
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn hex_output_matches_input() {
        let color = parse_hex_color("#dc2626").expect("gültige Farbe");
        assert_eq!(to_hex_color(color), "#dc2626");
    }
}
