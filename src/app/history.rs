use super::SelectionState;
use crate::core::{Scheme, SegmentRef};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Schema-Klon findet erst beim nächsten `Arc::make_mut()` statt.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Schema (Arc-Klon für O(1)-Snapshot)
    pub scheme: Arc<Scheme>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
    /// Bearbeitungsfokus zum Zeitpunkt des Snapshots
    pub edit_focus: Option<SegmentRef>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            scheme: Arc::clone(&state.scheme),
            selection: state.selection.clone(),
            edit_focus: state.editor.edit_focus.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.scheme = self.scheme;
        state.selection = self.selection;
        state.editor.edit_focus = self.edit_focus;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use glam::Vec2;

    fn make_snapshot_with_stop_count(count: usize) -> Snapshot {
        let mut scheme = Scheme::new();
        for i in 1..=count {
            let f = i as f32;
            scheme
                .add_stop(&format!("S{i}"), Some(Vec2::new(f * 10.0, f * 7.0)))
                .expect("Haltestelle anlegen");
        }
        let mut state = AppState::new();
        state.scheme = Arc::new(scheme);
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_stop_count(2));

        let current = make_snapshot_with_stop_count(5);
        let restored = history
            .pop_undo_with_current(current)
            .expect("undo vorhanden");

        assert_eq!(restored.scheme.stop_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_stop_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_stop_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_stop_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.scheme.stop_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_stop_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_stop_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_stop_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_stop_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_stop_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn snapshot_shares_scheme_until_mutation() {
        let mut state = AppState::new();
        state
            .scheme_mut()
            .add_stop("A", Some(Vec2::ZERO))
            .expect("Haltestelle anlegen");
        let snap = Snapshot::from_state(&state);
        assert!(Arc::ptr_eq(&snap.scheme, &state.scheme));

        state
            .scheme_mut()
            .add_stop("B", Some(Vec2::ONE))
            .expect("Haltestelle anlegen");
        assert!(!Arc::ptr_eq(&snap.scheme, &state.scheme));
        assert_eq!(snap.scheme.stop_count(), 1);
    }

    #[test]
    fn snapshot_apply_to_restores_state() {
        let mut original = AppState::new();
        original
            .scheme_mut()
            .add_stop("A", Some(Vec2::ZERO))
            .expect("Haltestelle anlegen");
        original.selection.ids_mut().insert("001".into());

        let snap = Snapshot::from_state(&original);
        let mut target = AppState::new();
        snap.apply_to(&mut target);

        assert_eq!(target.stop_count(), 1);
        assert!(target.selection.contains("001"));
    }
}
