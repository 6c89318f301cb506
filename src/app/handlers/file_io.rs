//! Handler für Datei-Operationen (Laden, Speichern, Import, Export).

use crate::app::use_cases;
use crate::app::AppState;

/// Verwirft das aktuelle Schema zugunsten eines leeren.
pub fn new_scheme(state: &mut AppState) {
    use_cases::file_io::new_scheme(state);
}

/// Lädt ein Schema aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_file(state, path)
}

/// Importiert ein Schema aus JSON-Text.
pub fn import(state: &mut AppState, json: &str) {
    use_cases::file_io::import_scheme(state, json);
}

/// Speichert das Schema.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}

/// Exportiert das Schema als PNG.
pub fn export_png(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::export::export_png(state, path)
}

/// Exportiert das Schema als SVG.
pub fn export_svg(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::export::export_svg(state, path)
}
