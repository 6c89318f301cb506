//! Kurzlebige Meldungen an die UI (Toasts, Commit-Events).

use glam::Vec2;

use crate::core::{EditError, SegmentRef};

/// Meldung an die UI, abgeholt über `AppState::take_notifications`.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Erfolgreiche Aktion
    Info(String),
    /// Abgelehnte Aktion (Validierung, Vorbedingung, Import)
    Failure(String),
    /// Wegpunkt-Drag abgeschlossen, finale Position
    SegmentPointCommitted {
        /// Betroffenes Segment
        segment: SegmentRef,
        /// Index des Wegpunkts
        index: usize,
        /// Endposition
        position: Vec2,
    },
}

impl Notification {
    /// Meldung für einen fehlgeschlagenen Editor-Schritt, `None` für stille Fehler.
    pub fn from_error(err: &EditError) -> Option<Self> {
        if err.is_silent() {
            None
        } else {
            Some(Self::Failure(err.to_string()))
        }
    }
}
