use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Haltestellen-IDs in Auswahlreihenfolge
    /// (Arc für O(1)-Clone in RenderScene und Undo-Snapshots)
    pub selected_stop_ids: Arc<IndexSet<String>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_stop_ids: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf die Menge zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit der
    /// Arc-Klon in `render_scene::build()` O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_stop_ids)
    }

    /// Gibt zurück, ob die Haltestelle selektiert ist.
    pub fn contains(&self, stop_id: &str) -> bool {
        self.selected_stop_ids.contains(stop_id)
    }

    /// Anzahl selektierter Haltestellen.
    pub fn len(&self) -> usize {
        self.selected_stop_ids.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_stop_ids.is_empty()
    }

    /// Schaltet die Zugehörigkeit einer Haltestelle um. Liefert `true`, wenn
    /// sie danach selektiert ist.
    pub fn toggle(&mut self, stop_id: &str) -> bool {
        let ids = self.ids_mut();
        if ids.shift_remove(stop_id) {
            false
        } else {
            ids.insert(stop_id.to_string());
            true
        }
    }

    /// Ersetzt die Selektion durch genau eine Haltestelle.
    pub fn replace_with(&mut self, stop_id: &str) {
        let ids = self.ids_mut();
        ids.clear();
        ids.insert(stop_id.to_string());
    }
}
