//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
