//! Reiner Renderer: `RenderScene` → Display-Liste (`Frame`).
//!
//! Zeichenreihenfolge: Hintergrund und Raster, Linien-Segmente mit
//! Parallelversatz, Wegpunkte des fokussierten Segments, Haltestellen mit
//! Beschriftung. Gleiche Eingabe liefert den gleichen Frame; das Modell wird
//! nie verändert.

mod background_renderer;
mod control_point_renderer;
mod raster;
mod route_renderer;
mod stop_renderer;
mod svg;
mod types;

pub use crate::shared::{RenderQuality, RenderScene};
pub use raster::{export_png, rasterize};
pub use svg::to_svg;
pub use types::{parse_hex_color, DrawCommand, Frame, Rgba, Stroke, TextAnchor};

/// Baut den vollständigen Frame einer Szene.
pub fn build_frame(scene: &RenderScene) -> Frame {
    let options = &scene.options;
    let mut frame = Frame::new(options.canvas_width, options.canvas_height);

    background_renderer::render_background(&mut frame, options);
    route_renderer::render_routes(&mut frame, &scene.scheme, options);
    control_point_renderer::render_control_points(
        &mut frame,
        &scene.scheme,
        scene.edit_focus.as_ref(),
        options,
    );
    stop_renderer::render_stops(&mut frame, scene);

    frame
}
