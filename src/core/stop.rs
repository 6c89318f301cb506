//! Repräsentiert eine Haltestelle im Schema.

use std::collections::HashSet;

use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Seite der Haltestellen-Markierung, an der der Name gezeichnet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Oberhalb, zentriert
    #[default]
    Top,
    /// Unterhalb, zentriert
    Bottom,
    /// Links, rechtsbündig
    Left,
    /// Rechts, linksbündig
    Right,
}

/// Eine Haltestelle
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Stabile, eindeutige ID (z.B. "001")
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Position im Zeichenraum
    pub position: Vec2,
    /// Seite des Namens
    pub label_position: LabelPosition,
    /// Endhaltestelle (größere Markierung)
    pub is_terminal: bool,
    /// Linien, die diese Haltestelle enthalten (denormalisiert, von `Scheme` gepflegt)
    pub(crate) route_memberships: IndexSet<String>,
}

impl Stop {
    /// Erstellt eine neue Haltestelle ohne Linienzugehörigkeit.
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Vec2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            label_position: LabelPosition::default(),
            is_terminal: false,
            route_memberships: IndexSet::new(),
        }
    }

    /// Linien-IDs, denen die Haltestelle angehört (Einfügereihenfolge).
    pub fn route_memberships(&self) -> &IndexSet<String> {
        &self.route_memberships
    }

    /// Trefferradius abhängig vom Endhaltestellen-Flag.
    pub fn marker_radius(&self, regular_radius: f32, terminal_radius: f32) -> f32 {
        if self.is_terminal {
            terminal_radius
        } else {
            regular_radius
        }
    }
}

/// Teil-Update einer Haltestelle (nur gesetzte Felder werden übernommen)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopUpdate {
    /// Neuer Name (darf nicht leer sein)
    pub name: Option<String>,
    /// Neue absolute Position (Segment-Enden folgen)
    pub position: Option<Vec2>,
    /// Neue Beschriftungsseite
    pub label_position: Option<LabelPosition>,
    /// Endhaltestellen-Flag
    pub is_terminal: Option<bool>,
}

/// Berechnet die nächste freie Haltestellen-ID: größte numerische ID + 1,
/// auf drei Stellen mit Nullen aufgefüllt. Nicht-numerische IDs zählen als 0.
///
/// Ist die größte ID bereits `u64::MAX`, wird die kleinste freie ID ab `001`
/// vergeben.
pub fn next_stop_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let existing: HashSet<&str> = existing.into_iter().collect();
    let max = existing
        .iter()
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    if let Some(next) = max.checked_add(1) {
        let id = format!("{next:03}");
        if !existing.contains(id.as_str()) {
            return id;
        }
    }
    (1..=u64::MAX)
        .map(|n| format!("{n:03}"))
        .find(|id| !existing.contains(id.as_str()))
        .unwrap_or_default()
}
