//! Application State: zentrale Datenhaltung.

mod editor;
mod selection;

pub use editor::{EditorMode, EditorState};
pub use selection::SelectionState;

use super::history::{EditHistory, Snapshot};
use super::notifications::Notification;
use super::CommandLog;
use crate::core::{EditError, Scheme};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Pfad der aktuell geladenen Datei (für Save ohne Pfad)
    pub current_file_path: Option<String>,
    /// Noch nicht abgeholte Meldungen an die UI
    pub notifications: Vec<Notification>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Schema (Arc für O(1)-Snapshots, Copy-on-Write bei Mutation)
    pub scheme: Arc<Scheme>,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-State (Modus, Bearbeitungsfokus, Drag)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Toleranzen)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Schema
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen App-State mit vorgegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scheme: Arc::new(Scheme::new()),
            ui: UiState::default(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            options,
        }
    }

    /// Gibt die Anzahl der Haltestellen zurück (für UI-Anzeige)
    pub fn stop_count(&self) -> usize {
        self.scheme.stop_count()
    }

    /// Gibt die Anzahl der Linien zurück (für UI-Anzeige)
    pub fn route_count(&self) -> usize {
        self.scheme.route_count()
    }

    /// Mutabler Zugriff auf das Schema (klont nur, wenn ein Snapshot es teilt).
    pub fn scheme_mut(&mut self) -> &mut Scheme {
        Arc::make_mut(&mut self.scheme)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Reiht eine Meldung für die UI ein.
    pub fn notify(&mut self, notification: Notification) {
        self.ui.notifications.push(notification);
    }

    /// Meldet einen abgelehnten Editor-Schritt: veraltete Referenzen still
    /// (debug), alles andere als `Notification::Failure`.
    pub fn report_error(&mut self, action: &str, err: &EditError) {
        match Notification::from_error(err) {
            Some(notification) => {
                log::warn!("{} abgelehnt: {}", action, err);
                self.notify(notification);
            }
            None => log::debug!("{} ignoriert: {}", action, err),
        }
    }

    /// Holt alle aufgelaufenen Meldungen ab und leert die Warteschlange.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.ui.notifications)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
