//! Zustandsmaschine für Zeiger-Drags auf der Zeichenfläche.

use glam::Vec2;

use crate::core::SegmentRef;

/// Laufende Drag-Interaktion
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// Keine Interaktion
    #[default]
    Idle,
    /// Haltestellen werden inkrementell verschoben
    DraggingStops {
        /// Alle mitbewegten Haltestellen
        stop_ids: Vec<String>,
        /// Zuletzt verarbeitete Zeigerposition
        last_pos: Vec2,
    },
    /// Ein Wegpunkt des fokussierten Segments folgt dem Zeiger
    DraggingControlPoint {
        /// Betroffenes Segment
        segment: SegmentRef,
        /// Index des Wegpunkts
        index: usize,
    },
}

impl DragState {
    /// `true`, solange kein Drag läuft.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Zeigertaste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primäre Taste (Selektieren, Ziehen, Platzieren)
    Primary,
    /// Sekundäre Taste (Wegpunkt löschen)
    Secondary,
}

/// Richtung einer Pfeiltasten-Verschiebung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// Nach oben (negatives y)
    Up,
    /// Nach unten
    Down,
    /// Nach links
    Left,
    /// Nach rechts
    Right,
}

impl NudgeDirection {
    /// Verschiebungsvektor für eine Schrittweite.
    pub fn delta(self, step: f32) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -step),
            Self::Down => Vec2::new(0.0, step),
            Self::Left => Vec2::new(-step, 0.0),
            Self::Right => Vec2::new(step, 0.0),
        }
    }
}
