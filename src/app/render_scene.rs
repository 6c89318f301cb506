//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Schema und Selektion werden per Arc geteilt, der Aufruf kopiert keine
/// Haltestellen oder Linien.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        scheme: Arc::clone(&state.scheme),
        selected_stop_ids: Arc::clone(&state.selection.selected_stop_ids),
        edit_focus: state.editor.edit_focus.clone(),
        options: state.options.clone(),
    }
}
