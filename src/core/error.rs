//! Fehlertaxonomie der Editor-Operationen.
//!
//! Alle Fehler sind behebbar: die Operation wird komplett verworfen, der
//! Zustand bleibt unverändert.

use std::fmt;
use thiserror::Error;

/// Art des referenzierten Objekts bei [`EditError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Haltestelle
    Stop,
    /// Linie
    Route,
    /// Segment zwischen zwei Haltestellen einer Linie
    Segment,
    /// Wegpunkt innerhalb eines Segments
    Waypoint,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stop => "Haltestelle",
            Self::Route => "Linie",
            Self::Segment => "Segment",
            Self::Waypoint => "Wegpunkt",
        };
        f.write_str(label)
    }
}

/// Fehler einer Mutations- oder Import-Operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Pflichtfeld leer oder Wert außerhalb des erlaubten Bereichs
    #[error("Ungültige Eingabe im Feld '{field}'")]
    Validation {
        /// Name des betroffenen Feldes
        field: &'static str,
    },
    /// Vorbedingung der Operation nicht erfüllt
    #[error("Vorbedingung nicht erfüllt: {0}")]
    Precondition(String),
    /// Referenzierte ID existiert nicht (mehr)
    #[error("{kind} '{id}' nicht gefunden")]
    NotFound {
        /// Art des gesuchten Objekts
        kind: EntityKind,
        /// Gesuchte ID bzw. Schlüssel
        id: String,
    },
    /// Importdatei ist kein gültiges Schema
    #[error("Import fehlgeschlagen: {0}")]
    ImportFormat(String),
}

impl EditError {
    /// Kurzform für [`EditError::NotFound`].
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Kurzform für [`EditError::Precondition`].
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// `true` für veraltete Referenzen, die still ignoriert werden.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_silent_others_are_not() {
        assert!(EditError::not_found(EntityKind::Stop, "007").is_silent());
        assert!(!EditError::Validation { field: "name" }.is_silent());
        assert!(!EditError::precondition("zu wenige Haltestellen").is_silent());
    }

    #[test]
    fn messages_name_the_entity() {
        let msg = EditError::not_found(EntityKind::Route, "r1").to_string();
        assert_eq!(msg, "Linie 'r1' nicht gefunden");
    }
}
