//! Render-Qualitätsstufen für Anti-Aliasing (shared zwischen App und Renderer).

use serde::{Deserialize, Serialize};

/// Qualitätsstufe für Anti-Aliasing beim Rastern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    /// Kein Anti-Aliasing (harte Kanten, schnellste Ausgabe)
    Low,
    /// Anti-Aliasing für Formen, schnelle Textdarstellung
    Medium,
    /// Anti-Aliasing für Formen und Text
    #[default]
    High,
}
