//! Zentrale Konfiguration für den Transit Scheme Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::RenderQuality;
use crate::core::{AlignAnchor, StopHitRadii, StopPlacement};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Breite der Zeichenfläche in Einheiten.
pub const CANVAS_WIDTH: f32 = 3000.0;
/// Höhe der Zeichenfläche in Einheiten.
pub const CANVAS_HEIGHT: f32 = 2000.0;
/// Kantenlänge einer Rasterzelle.
pub const GRID_SIZE: f32 = 50.0;
/// Hintergrundfarbe (RGBA: #F9FAFB).
pub const BACKGROUND_COLOR: [f32; 4] = [0.976, 0.980, 0.984, 1.0];
/// Rasterfarbe (RGBA: #E5E7EB).
pub const GRID_COLOR: [f32; 4] = [0.898, 0.906, 0.922, 1.0];
/// Linienstärke des Rasters.
pub const GRID_LINE_WIDTH: f32 = 1.0;

// ── Linien ──────────────────────────────────────────────────────────

/// Seitlicher Abstand paralleler Linien auf gemeinsamer Strecke.
pub const PARALLEL_SPACING: f32 = 8.0;
/// Strichmuster gestrichelter Linien (Strich, Lücke).
pub const DASH_PATTERN: [f32; 2] = [10.0, 5.0];
/// Farbpalette für neue Linien.
pub const ROUTE_COLORS: [&str; 10] = [
    "#DC2626", "#2563EB", "#16A34A", "#EA580C", "#9333EA", "#DB2777", "#0891B2", "#CA8A04",
    "#4F46E5", "#65A30D",
];
/// Standard-Linienstärke neuer Linien.
pub const DEFAULT_LINE_WIDTH: f32 = 4.0;

// ── Haltestellen ────────────────────────────────────────────────────

/// Radius normaler Haltestellen.
pub const STOP_RADIUS: f32 = 7.0;
/// Radius von Endhaltestellen.
pub const TERMINAL_RADIUS: f32 = 10.0;
/// Radius des inneren Punkts einer Endhaltestelle.
pub const TERMINAL_DOT_RADIUS: f32 = 4.0;
/// Füllfarbe der Haltestellen (RGBA: Weiß).
pub const STOP_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Umrandung normaler Haltestellen (RGBA: #1F2937).
pub const STOP_STROKE_COLOR: [f32; 4] = [0.122, 0.161, 0.216, 1.0];
/// Umrandung selektierter Haltestellen (RGBA: #3B82F6).
pub const STOP_STROKE_COLOR_SELECTED: [f32; 4] = [0.231, 0.510, 0.965, 1.0];
/// Umrandungsstärke normaler Haltestellen.
pub const STOP_STROKE_WIDTH: f32 = 3.0;
/// Umrandungsstärke selektierter Haltestellen.
pub const STOP_STROKE_WIDTH_SELECTED: f32 = 4.0;

// ── Beschriftung ────────────────────────────────────────────────────

/// Schriftgröße der Haltestellennamen.
pub const LABEL_FONT_SIZE: f32 = 13.0;
/// Abstand des Namens oberhalb/links/rechts der Haltestelle.
pub const LABEL_OFFSET: f32 = 16.0;
/// Abstand des Namens unterhalb der Haltestelle (Grundlinie).
pub const LABEL_OFFSET_BELOW: f32 = 24.0;

// ── Wegpunkte ───────────────────────────────────────────────────────

/// Radius der Wegpunkt-Markierungen im Bearbeitungsmodus.
pub const CONTROL_POINT_RADIUS: f32 = 6.0;
/// Füllfarbe der Wegpunkte (RGBA: #F97316).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.976, 0.451, 0.086, 1.0];
/// Umrandungsstärke der Wegpunkte.
pub const CONTROL_POINT_OUTLINE_WIDTH: f32 = 2.0;
/// Schriftgröße der Wegpunkt-Nummern.
pub const CONTROL_POINT_FONT_SIZE: f32 = 9.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Treffer-Toleranz für Wegpunkte.
pub const CONTROL_POINT_TOLERANCE: f32 = 8.0;
/// Treffer-Toleranz für Segmente.
pub const SEGMENT_TOLERANCE: f32 = 10.0;
/// Verschiebung pro Pfeiltaste.
pub const NUDGE_STEP: f32 = 1.0;
/// Verschiebung pro Pfeiltaste mit Grob-Modifikator.
pub const NUDGE_STEP_COARSE: f32 = 10.0;

// ── Platzierung ─────────────────────────────────────────────────────

/// Erster Platzierungskandidat neuer Haltestellen ohne Position.
pub const DEFAULT_STOP_POSITION: [f32; 2] = [100.0, 100.0];
/// Abstand zwischen Platzierungskandidaten.
pub const PLACEMENT_STEP: f32 = 50.0;
/// Platzierungskandidaten pro Zeile.
pub const PLACEMENT_COLUMNS: usize = 10;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `transit_scheme_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Breite der Zeichenfläche
    pub canvas_width: f32,
    /// Höhe der Zeichenfläche
    pub canvas_height: f32,
    /// Rasterweite (0 = kein Raster)
    pub grid_size: f32,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Rasterfarbe
    pub grid_color: [f32; 4],
    /// Linienstärke des Rasters
    pub grid_line_width: f32,
    /// Anti-Aliasing beim Rastern
    pub render_quality: RenderQuality,

    // ── Linien ──────────────────────────────────────────────────
    /// Seitlicher Abstand paralleler Linien
    pub parallel_spacing: f32,
    /// Strichmuster gestrichelter Linien
    pub dash_pattern: [f32; 2],
    /// Farbpalette für neue Linien
    pub route_colors: Vec<String>,
    /// Standard-Linienstärke neuer Linien
    pub default_line_width: f32,

    // ── Haltestellen ────────────────────────────────────────────
    /// Radius normaler Haltestellen (Darstellung und Hitbox)
    pub stop_radius: f32,
    /// Radius von Endhaltestellen (Darstellung und Hitbox)
    pub terminal_radius: f32,
    /// Radius des inneren Punkts von Endhaltestellen
    pub terminal_dot_radius: f32,
    /// Füllfarbe
    pub stop_fill_color: [f32; 4],
    /// Umrandung normal
    pub stop_stroke_color: [f32; 4],
    /// Umrandung selektiert
    pub stop_stroke_color_selected: [f32; 4],
    /// Umrandungsstärke normal
    pub stop_stroke_width: f32,
    /// Umrandungsstärke selektiert
    pub stop_stroke_width_selected: f32,
    /// Schriftgröße der Namen
    pub label_font_size: f32,
    /// Abstand oben/links/rechts
    pub label_offset: f32,
    /// Abstand unten
    pub label_offset_below: f32,

    // ── Wegpunkte ───────────────────────────────────────────────
    /// Radius der Wegpunkt-Markierungen
    pub control_point_radius: f32,
    /// Füllfarbe der Wegpunkte
    pub control_point_color: [f32; 4],
    /// Umrandungsstärke der Wegpunkte
    pub control_point_outline_width: f32,
    /// Schriftgröße der Wegpunkt-Nummern
    pub control_point_font_size: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Treffer-Toleranz für Wegpunkte
    pub control_point_tolerance: f32,
    /// Treffer-Toleranz für Segmente
    pub segment_tolerance: f32,
    /// Verschiebung pro Pfeiltaste
    pub nudge_step: f32,
    /// Verschiebung pro Pfeiltaste mit Grob-Modifikator
    pub nudge_step_coarse: f32,
    /// Bezugswert beim Ausrichten: Mittelwert oder erste Auswahl
    pub align_to_first: bool,

    // ── Haltestellen anlegen / löschen ──────────────────────────
    /// Namenspräfix für per Klick angelegte Haltestellen
    pub new_stop_name_prefix: String,
    /// Erster Platzierungskandidat
    pub default_stop_position: [f32; 2],
    /// Abstand zwischen Platzierungskandidaten
    pub placement_step: f32,
    /// Kandidaten pro Zeile
    pub placement_columns: usize,
    /// Nachbarn verbinden, wenn eine mittlere Haltestelle entfernt wird
    pub reconnect_on_delete: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            grid_size: GRID_SIZE,
            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            grid_line_width: GRID_LINE_WIDTH,
            render_quality: RenderQuality::default(),

            parallel_spacing: PARALLEL_SPACING,
            dash_pattern: DASH_PATTERN,
            route_colors: ROUTE_COLORS.iter().map(|c| c.to_string()).collect(),
            default_line_width: DEFAULT_LINE_WIDTH,

            stop_radius: STOP_RADIUS,
            terminal_radius: TERMINAL_RADIUS,
            terminal_dot_radius: TERMINAL_DOT_RADIUS,
            stop_fill_color: STOP_FILL_COLOR,
            stop_stroke_color: STOP_STROKE_COLOR,
            stop_stroke_color_selected: STOP_STROKE_COLOR_SELECTED,
            stop_stroke_width: STOP_STROKE_WIDTH,
            stop_stroke_width_selected: STOP_STROKE_WIDTH_SELECTED,
            label_font_size: LABEL_FONT_SIZE,
            label_offset: LABEL_OFFSET,
            label_offset_below: LABEL_OFFSET_BELOW,

            control_point_radius: CONTROL_POINT_RADIUS,
            control_point_color: CONTROL_POINT_COLOR,
            control_point_outline_width: CONTROL_POINT_OUTLINE_WIDTH,
            control_point_font_size: CONTROL_POINT_FONT_SIZE,

            control_point_tolerance: CONTROL_POINT_TOLERANCE,
            segment_tolerance: SEGMENT_TOLERANCE,
            nudge_step: NUDGE_STEP,
            nudge_step_coarse: NUDGE_STEP_COARSE,
            align_to_first: false,

            new_stop_name_prefix: "Haltestelle".to_string(),
            default_stop_position: DEFAULT_STOP_POSITION,
            placement_step: PLACEMENT_STEP,
            placement_columns: PLACEMENT_COLUMNS,
            reconnect_on_delete: false,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("transit_scheme_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("transit_scheme_editor.toml")
    }

    /// Trefferradien der Haltestellen-Markierungen.
    pub fn stop_hit_radii(&self) -> StopHitRadii {
        StopHitRadii {
            regular: self.stop_radius,
            terminal: self.terminal_radius,
        }
    }

    /// Platzierungsparameter für Haltestellen ohne Position.
    ///
    /// Kandidaten müssen weiter als der Endhaltestellen-Radius von allen
    /// bestehenden Haltestellen entfernt sein.
    pub fn stop_placement(&self) -> StopPlacement {
        StopPlacement {
            origin: Vec2::from(self.default_stop_position),
            step: self.placement_step,
            columns: self.placement_columns,
            clearance: self.terminal_radius,
        }
    }

    /// Bezugswert für Ausrichtungen.
    pub fn align_anchor(&self) -> AlignAnchor {
        if self.align_to_first {
            AlignAnchor::First
        } else {
            AlignAnchor::Mean
        }
    }

    /// Farbe für die n-te neue Linie (zyklisch aus der Palette).
    pub fn route_color(&self, index: usize) -> String {
        if self.route_colors.is_empty() {
            return ROUTE_COLORS[index % ROUTE_COLORS.len()].to_string();
        }
        self.route_colors[index % self.route_colors.len()].clone()
    }
}
