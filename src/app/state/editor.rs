use crate::app::interaction::DragState;
use crate::core::SegmentRef;

/// Modus für Klicks auf leere Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Standard: Haltestellen selektieren und verschieben
    #[default]
    Select,
    /// Neue Haltestellen per Klick platzieren
    AddStop,
}

/// Zustand des Editors (Modus, Bearbeitungsfokus, laufender Drag)
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Segment, dessen Wegpunkte gerade bearbeitbar sind
    pub edit_focus: Option<SegmentRef>,
    /// Laufende Zeiger-Interaktion
    pub drag: DragState,
}

impl EditorState {
    /// Erstellt den Standard-Zustand (Select-Modus, kein Fokus, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }
}
