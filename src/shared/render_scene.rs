//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Scheme, SegmentRef};
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Das aktuelle Schema (Arc für O(1)-Clone pro Frame)
    pub scheme: Arc<Scheme>,
    /// IDs der aktuell selektierten Haltestellen
    pub selected_stop_ids: Arc<IndexSet<String>>,
    /// Segment im Bearbeitungsmodus (Wegpunkte sichtbar)
    pub edit_focus: Option<SegmentRef>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Szene ohne Selektion und Bearbeitungsfokus.
    pub fn from_scheme(scheme: Arc<Scheme>, options: EditorOptions) -> Self {
        Self {
            scheme,
            selected_stop_ids: Arc::new(IndexSet::new()),
            edit_focus: None,
            options,
        }
    }

    /// Gibt zurück, ob die Haltestelle selektiert ist.
    pub fn is_selected(&self, stop_id: &str) -> bool {
        self.selected_stop_ids.contains(stop_id)
    }
}
