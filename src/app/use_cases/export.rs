//! Use-Case: Schema als Bild exportieren.
//!
//! Exportiert wird ohne Selektion und Bearbeitungsfokus.

use crate::app::AppState;
use crate::render::{self, Frame};
use crate::shared::RenderScene;
use std::sync::Arc;

fn export_frame(state: &AppState) -> Frame {
    let scene = RenderScene::from_scheme(Arc::clone(&state.scheme), state.options.clone());
    render::build_frame(&scene)
}

/// Rastert das Schema und schreibt es als PNG.
pub fn export_png(state: &AppState, path: &str) -> anyhow::Result<()> {
    let frame = export_frame(state);
    render::export_png(&frame, state.options.render_quality, path)?;
    log::info!(
        "PNG exportiert: {} ({}x{})",
        path,
        frame.width,
        frame.height
    );
    Ok(())
}

/// Schreibt das Schema als SVG-Datei.
pub fn export_svg(state: &AppState, path: &str) -> anyhow::Result<()> {
    let frame = export_frame(state);
    std::fs::write(path, render::to_svg(&frame))?;
    log::info!("SVG exportiert: {}", path);
    Ok(())
}
