//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) für das Schema sind hier zentralisiert.

use crate::app::interaction::DragState;
use crate::app::notifications::Notification;
use crate::app::AppState;
use crate::core::Scheme;
use std::sync::Arc;

/// Ersetzt das Schema durch ein leeres (Undo-fähig).
pub fn new_scheme(state: &mut AppState) {
    replace_scheme(state, Scheme::new());
    state.ui.current_file_path = None;
    log::info!("Neues leeres Schema");
}

/// Lädt ein Schema aus einer JSON-Datei.
///
/// I/O-Fehler werden propagiert; ungültiger Inhalt wird als Meldung
/// ausgegeben und lässt den Zustand unverändert.
pub fn load_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)?;
    if import_scheme(state, &json) {
        log::info!("Datei geladen: {}", path);
        state.ui.current_file_path = Some(path);
    }
    Ok(())
}

/// Importiert ein Schema aus JSON-Text. Liefert `true` bei Erfolg.
pub fn import_scheme(state: &mut AppState, json: &str) -> bool {
    match crate::json::parse_scheme(json) {
        Ok(scheme) => {
            log::info!(
                "Schema importiert: {} Haltestellen, {} Linien",
                scheme.stop_count(),
                scheme.route_count()
            );
            let message = format!(
                "{} Haltestellen und {} Linien importiert",
                scheme.stop_count(),
                scheme.route_count()
            );
            replace_scheme(state, scheme);
            state.notify(Notification::Info(message));
            true
        }
        Err(err) => {
            state.report_error("Import", &err);
            false
        }
    }
}

/// Speichert das Schema; ohne Pfad wird der zuletzt verwendete genommen.
pub fn save_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        anyhow::bail!("Kein Speicherpfad bekannt");
    };

    let json = crate::json::write_scheme(&state.scheme)?;
    std::fs::write(&path, json)?;
    log::info!("Schema gespeichert: {}", path);
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Tauscht das Schema als einen Undo-Schritt aus und setzt Selektion,
/// Bearbeitungsfokus und Drag zurück.
fn replace_scheme(state: &mut AppState, scheme: Scheme) {
    state.record_undo_snapshot();
    state.scheme = Arc::new(scheme);
    state.selection.ids_mut().clear();
    state.editor.edit_focus = None;
    state.editor.drag = DragState::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_import_keeps_scheme() {
        let mut state = AppState::new();
        state
            .scheme_mut()
            .add_stop("A", None)
            .expect("Haltestelle anlegen");

        assert!(!import_scheme(&mut state, "{ kein json"));

        assert_eq!(state.stop_count(), 1);
        assert!(matches!(
            state.take_notifications().as_slice(),
            [Notification::Failure(_)]
        ));
    }

    #[test]
    fn import_replaces_and_is_undoable() {
        let mut state = AppState::new();
        state.selection.ids_mut().insert("001".into());

        let json = r#"{ "stops": [ { "id": "007", "name": "X", "x": 1, "y": 2 } ], "routes": [] }"#;
        assert!(import_scheme(&mut state, json));

        assert_eq!(state.stop_count(), 1);
        assert!(state.selection.is_empty());
        assert!(state.can_undo());
    }

    #[test]
    fn save_without_path_fails() {
        let mut state = AppState::new();
        assert!(save_file(&mut state, None).is_err());
    }
}
