//! Linien (Routes) und ihre Segment-Geometrie.

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Erlaubte Linienstärken (Palette der Linien-Editoren)
pub const LINE_WIDTHS: [f32; 6] = [2.0, 3.0, 4.0, 5.0, 6.0, 8.0];

/// Strichart einer Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Durchgezogen
    #[default]
    Solid,
    /// Gestrichelt
    Dashed,
}

/// Schlüssel eines Segments: geordnetes Paar (from, to)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentKey {
    /// Start-Haltestelle
    pub from: String,
    /// Ziel-Haltestelle
    pub to: String,
}

impl SegmentKey {
    /// Erstellt einen Schlüssel aus zwei Haltestellen-IDs.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Richtungsunabhängiger Gruppenschlüssel: das sortierte Paar.
    pub fn unordered(&self) -> (String, String) {
        if self.from <= self.to {
            (self.from.clone(), self.to.clone())
        } else {
            (self.to.clone(), self.from.clone())
        }
    }

    /// `true`, wenn `from` lexikographisch hinter `to` liegt (Gegenrichtung
    /// zur kanonischen Orientierung der Gruppe).
    pub fn is_reversed(&self) -> bool {
        self.from > self.to
    }

    /// Prüft, ob die Haltestelle ein Endpunkt ist.
    pub fn touches(&self, stop_id: &str) -> bool {
        self.from == stop_id || self.to == stop_id
    }
}

/// Verweis auf ein Segment innerhalb des Schemas (Linie + Schlüssel)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentRef {
    /// ID der Linie
    pub route_id: String,
    /// Start-Haltestelle
    pub from: String,
    /// Ziel-Haltestelle
    pub to: String,
}

impl SegmentRef {
    /// Erstellt einen Verweis.
    pub fn new(
        route_id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Zeichenbare Geometrie zwischen zwei benachbarten Haltestellen einer Linie
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start-Haltestelle
    pub from: String,
    /// Ziel-Haltestelle
    pub to: String,
    /// Wegpunkte (mindestens 2; erster/letzter folgen den Haltestellen)
    pub points: Vec<Vec2>,
}

impl Segment {
    /// Erstellt ein gerades 2-Punkt-Segment.
    pub fn straight(from: impl Into<String>, to: impl Into<String>, a: Vec2, b: Vec2) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            points: vec![a, b],
        }
    }

    /// Schlüssel des Segments.
    pub fn key(&self) -> SegmentKey {
        SegmentKey::new(self.from.clone(), self.to.clone())
    }

    /// Iterator über alle Kanten (aufeinanderfolgende Wegpunkt-Paare).
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Eine Linie mit geordneten Haltestellen und Segment-Geometrie
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Eindeutige ID
    pub id: String,
    /// Liniennummer (Pflichtfeld)
    pub number: String,
    /// Optionaler Linienname
    pub name: Option<String>,
    /// Strichfarbe als Hex-String (z.B. "#DC2626")
    pub color: String,
    /// Strichstärke aus [`LINE_WIDTHS`]
    pub line_width: f32,
    /// Strichart
    pub line_style: LineStyle,
    /// Haltestellen in Fahrtreihenfolge (ohne Duplikate)
    pub(crate) stops: Vec<String>,
    /// Segmente, indexiert nach (from, to), in Einfügereihenfolge
    pub(crate) segments: IndexMap<SegmentKey, Segment>,
}

impl Route {
    /// Erstellt eine leere Linie.
    pub fn new(
        id: impl Into<String>,
        number: impl Into<String>,
        color: impl Into<String>,
        line_width: f32,
        line_style: LineStyle,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            name: None,
            color: color.into(),
            line_width,
            line_style,
            stops: Vec::new(),
            segments: IndexMap::new(),
        }
    }

    /// Haltestellen-IDs in Fahrtreihenfolge.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Iterator über alle Segmente in Einfügereihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Findet ein Segment per (from, to) in O(1).
    pub fn segment(&self, from: &str, to: &str) -> Option<&Segment> {
        self.segments.get(&SegmentKey::new(from, to))
    }

    pub(crate) fn segment_mut(&mut self, from: &str, to: &str) -> Option<&mut Segment> {
        self.segments.get_mut(&SegmentKey::new(from, to))
    }

    /// Position einer Haltestelle in der Fahrtreihenfolge.
    pub fn stop_index(&self, stop_id: &str) -> Option<usize> {
        self.stops.iter().position(|id| id == stop_id)
    }

    /// Prüft, ob die Haltestelle zur Linie gehört.
    pub fn contains_stop(&self, stop_id: &str) -> bool {
        self.stop_index(stop_id).is_some()
    }

    /// Prüft, ob (from, to) ein benachbartes Paar der Fahrtreihenfolge ist.
    pub fn is_adjacent_pair(&self, from: &str, to: &str) -> bool {
        self.stops.windows(2).any(|w| w[0] == from && w[1] == to)
    }

    /// Schlüssel der (höchstens zwei) Segmente, die an der Haltestelle enden
    /// bzw. beginnen: (Vorgänger → Haltestelle, Haltestelle → Nachfolger).
    pub(crate) fn touching_keys(&self, stop_id: &str) -> (Option<SegmentKey>, Option<SegmentKey>) {
        let Some(index) = self.stop_index(stop_id) else {
            return (None, None);
        };
        let incoming = index
            .checked_sub(1)
            .map(|prev| SegmentKey::new(self.stops[prev].clone(), stop_id));
        let outgoing = self
            .stops
            .get(index + 1)
            .map(|next| SegmentKey::new(stop_id, next.clone()));
        (incoming, outgoing)
    }
}

/// Teil-Update einer Linie (nur gesetzte Felder werden übernommen)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteUpdate {
    /// Neue Liniennummer (darf nicht leer sein)
    pub number: Option<String>,
    /// Neuer Name (`Some(None)` entfernt den Namen)
    pub name: Option<Option<String>>,
    /// Neue Farbe
    pub color: Option<String>,
    /// Neue Strichstärke aus [`LINE_WIDTHS`]
    pub line_width: Option<f32>,
    /// Neue Strichart
    pub line_style: Option<LineStyle>,
}

/// Prüft, ob eine Strichstärke in der Palette liegt.
pub fn is_valid_line_width(width: f32) -> bool {
    LINE_WIDTHS.contains(&width)
}
