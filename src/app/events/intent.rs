use crate::app::interaction::{NudgeDirection, PointerButton};
use crate::app::state::EditorMode;
use crate::core::{AlignAxis, LineStyle, RouteUpdate, SegmentRef, StopUpdate};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeiger & Tastatur ──────────────────────────────────────────
    /// Zeigertaste gedrückt
    PointerPressed {
        pos: glam::Vec2,
        button: PointerButton,
        /// Auswahl-Modifikator (Umschalten statt Ersetzen)
        modifier: bool,
    },
    /// Zeiger bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Zeigertaste losgelassen
    PointerReleased { pos: glam::Vec2 },
    /// Pfeiltaste: Selektion verschieben
    NudgeRequested {
        direction: NudgeDirection,
        /// Grob-Modifikator (größere Schrittweite)
        coarse: bool,
    },
    /// Editor-Modus wechseln
    SetEditorModeRequested { mode: EditorMode },

    // ── Haltestellen ───────────────────────────────────────────────
    /// Neue Haltestelle (ohne Position: automatische Platzierung)
    AddStopRequested {
        name: String,
        position: Option<glam::Vec2>,
    },
    /// Haltestelle ändern (Name, Position, Beschriftung, Endhaltestelle)
    UpdateStopRequested { stop_id: String, update: StopUpdate },
    /// Haltestelle löschen
    DeleteStopRequested { stop_id: String },
    /// Alle selektierten Haltestellen löschen
    DeleteSelectedRequested,

    // ── Linien ─────────────────────────────────────────────────────
    /// Neue Linie (ohne Farbe/Stärke: Palette bzw. Standard aus Optionen)
    AddRouteRequested {
        number: String,
        name: Option<String>,
        color: Option<String>,
        line_width: Option<f32>,
        line_style: LineStyle,
    },
    /// Linie ändern
    UpdateRouteRequested { route_id: String, update: RouteUpdate },
    /// Linie löschen
    DeleteRouteRequested { route_id: String },
    /// Haltestelle an Linie anhängen
    AddStopToRouteRequested { route_id: String, stop_id: String },
    /// Haltestelle aus Linie entfernen
    RemoveStopFromRouteRequested { route_id: String, stop_id: String },
    /// Haltestellen einer Linie neu anordnen
    ReorderRouteStopsRequested {
        route_id: String,
        stop_ids: Vec<String>,
    },
    /// Alle Segmente einer Linie gerade neu erzeugen
    AutoRouteRequested { route_id: String },

    // ── Segmente ───────────────────────────────────────────────────
    /// Segment für Wegpunkt-Bearbeitung fokussieren
    BeginEditSegmentRequested { segment: SegmentRef },
    /// Segment unter dem Zeiger fokussieren (kein Treffer: Fokus aufheben)
    PickSegmentRequested { pos: glam::Vec2 },
    /// Bearbeitungsfokus aufheben
    EndEditSegmentRequested,
    /// Wegpunkt am Ende eines Segments ergänzen
    AddSegmentPointRequested { segment: SegmentRef },
    /// Wegpunkt löschen
    DeleteSegmentPointRequested { segment: SegmentRef, index: usize },
    /// Wegpunkt auf absolute Position setzen
    MoveSegmentPointRequested {
        segment: SegmentRef,
        index: usize,
        position: glam::Vec2,
    },

    // ── Selektion ──────────────────────────────────────────────────
    /// Haltestelle selektieren (`additive`: umschalten)
    SelectStopRequested { stop_id: String, additive: bool },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Alle Haltestellen selektieren
    SelectAllRequested,
    /// Selektierte Haltestellen ausrichten
    AlignSelectedRequested { axis: AlignAxis },
    /// Selektierte Haltestellen um Delta verschieben
    MoveSelectedRequested { delta: glam::Vec2 },

    // ── Datei & Export ─────────────────────────────────────────────
    /// Leeres Schema beginnen
    NewSchemeRequested,
    /// Schema aus Datei laden
    FileSelected { path: String },
    /// Schema aus JSON-Text importieren
    ImportRequested { json: String },
    /// Speichern unter aktuellem Pfad
    SaveRequested,
    /// Speichern unter neuem Pfad
    SaveFilePathSelected { path: String },
    /// Schema als PNG exportieren
    ExportPngRequested { path: String },
    /// Schema als SVG exportieren
    ExportSvgRequested { path: String },

    // ── Optionen & History ─────────────────────────────────────────
    /// Optionen übernehmen
    OptionsChanged { options: EditorOptions },
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
}
