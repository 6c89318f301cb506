use crate::app::state::EditorMode;
use crate::core::{AlignAxis, LineStyle, RouteUpdate, SegmentRef, StopUpdate};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Editor ===
    /// Editor-Modus wechseln
    SetEditorMode { mode: EditorMode },

    // === Haltestellen ===
    /// Haltestelle mit Namen anlegen
    AddStop {
        name: String,
        position: Option<glam::Vec2>,
    },
    /// Haltestelle per Klick anlegen (Name aus Präfix + ID)
    AddStopAtPosition { position: glam::Vec2 },
    /// Haltestelle ändern
    UpdateStop { stop_id: String, update: StopUpdate },
    /// Haltestelle löschen
    DeleteStop { stop_id: String },
    /// Selektierte Haltestellen löschen
    DeleteSelectedStops,

    // === Linien ===
    /// Linie anlegen
    AddRoute {
        number: String,
        name: Option<String>,
        color: String,
        line_width: f32,
        line_style: LineStyle,
    },
    /// Linie ändern
    UpdateRoute { route_id: String, update: RouteUpdate },
    /// Linie löschen
    DeleteRoute { route_id: String },
    /// Haltestelle anhängen
    AddStopToRoute { route_id: String, stop_id: String },
    /// Haltestelle entfernen
    RemoveStopFromRoute { route_id: String, stop_id: String },
    /// Haltestellen neu anordnen
    ReorderRouteStops {
        route_id: String,
        stop_ids: Vec<String>,
    },
    /// Segmente gerade neu erzeugen
    AutoRoute { route_id: String },

    // === Segmente ===
    /// Bearbeitungsfokus setzen
    BeginEditSegment { segment: SegmentRef },
    /// Bearbeitungsfokus aufheben
    EndEditSegment,
    /// Wegpunkt ergänzen
    AddSegmentPoint { segment: SegmentRef },
    /// Wegpunkt löschen
    DeleteSegmentPoint { segment: SegmentRef, index: usize },
    /// Wegpunkt setzen
    MoveSegmentPoint {
        segment: SegmentRef,
        index: usize,
        position: glam::Vec2,
    },

    // === Selektion ===
    /// Haltestelle selektieren (`additive`: umschalten)
    SelectStop { stop_id: String, additive: bool },
    /// Selektion aufheben
    ClearSelection,
    /// Alle Haltestellen selektieren
    SelectAllStops,
    /// Selektierte Haltestellen ausrichten
    AlignSelected { axis: AlignAxis },
    /// Move-Lifecycle Start: Undo-Snapshot aufnehmen
    BeginMoveSelectedStops,
    /// Selektierte Haltestellen um Delta verschieben
    MoveSelectedStops { delta: glam::Vec2 },

    // === Drag ===
    /// Haltestellen-Drag beginnen (Zielmenge aus aktueller Selektion)
    BeginStopDrag { stop_id: String, pos: glam::Vec2 },
    /// Wegpunkt-Drag beginnen
    BeginControlPointDrag { segment: SegmentRef, index: usize },
    /// Drag auf neue Zeigerposition fortsetzen
    DragTo { pos: glam::Vec2 },
    /// Drag beenden
    EndDrag,

    // === Datei & Export ===
    /// Leeres Schema
    NewScheme,
    /// Schema aus Datei laden
    LoadFile { path: String },
    /// Schema aus JSON-Text importieren
    ImportScheme { json: String },
    /// Schema speichern (`None`: aktueller Pfad)
    SaveFile { path: Option<String> },
    /// PNG-Export
    ExportPng { path: String },
    /// SVG-Export
    ExportSvg { path: String },

    // === Optionen & History ===
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Undo
    Undo,
    /// Redo
    Redo,
}
