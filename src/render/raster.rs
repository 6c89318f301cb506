//! Rasterung eines Frames über resvg und PNG-Export über image.

use anyhow::{anyhow, bail};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use super::svg::to_svg;
use super::types::Frame;
use crate::shared::RenderQuality;

/// Rastert den Frame in ein RGBA-Bild in Zeichenflächen-Größe.
pub fn rasterize(frame: &Frame, quality: RenderQuality) -> anyhow::Result<image::RgbaImage> {
    let width = frame.width.ceil();
    let height = frame.height.ceil();
    if !(width >= 1.0 && height >= 1.0) || width > u32::MAX as f32 || height > u32::MAX as f32 {
        bail!("Ungültige Bildgröße {}x{}", frame.width, frame.height);
    }
    let (width, height) = (width as u32, height as u32);

    let mut options = usvg::Options::default();
    options.shape_rendering = match quality {
        RenderQuality::Low => usvg::ShapeRendering::CrispEdges,
        RenderQuality::Medium | RenderQuality::High => usvg::ShapeRendering::GeometricPrecision,
    };
    options.text_rendering = match quality {
        RenderQuality::Low | RenderQuality::Medium => usvg::TextRendering::OptimizeSpeed,
        RenderQuality::High => usvg::TextRendering::OptimizeLegibility,
    };
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&to_svg(frame), &options)
        .map_err(|err| anyhow!("Erzeugtes SVG nicht lesbar: {err}"))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("Pixmap {width}x{height} konnte nicht angelegt werden"))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    log::debug!("Frame gerastert: {}x{} ({:?})", width, height, quality);
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| anyhow!("Pixelpuffer passt nicht zur Bildgröße"))
}

/// Rastert den Frame und speichert ihn als PNG-Datei.
pub fn export_png(
    frame: &Frame,
    quality: RenderQuality,
    path: impl AsRef<std::path::Path>,
) -> anyhow::Result<()> {
    let image = rasterize(frame, quality)?;
    image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::{DrawCommand, TextAnchor};
    use glam::Vec2;

    #[test]
    fn background_fill_reaches_pixels() {
        let mut frame = Frame::new(4.0, 3.0);
        frame.push(DrawCommand::Rect {
            min: Vec2::ZERO,
            size: Vec2::new(4.0, 3.0),
            fill: [1.0, 0.0, 0.0, 1.0],
        });

        let image = rasterize(&frame, RenderQuality::Low).expect("Rasterung");

        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(2, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn label_with_control_character_still_rasterizes() {
        let mut frame = Frame::new(40.0, 20.0);
        frame.push(DrawCommand::Text {
            position: Vec2::new(20.0, 10.0),
            text: "A\u{1}B".to_string(),
            font_size: 13.0,
            bold: false,
            color: [0.0, 0.0, 0.0, 1.0],
            anchor: TextAnchor::Middle,
        });

        assert!(rasterize(&frame, RenderQuality::Low).is_ok());
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let frame = Frame::new(0.0, 10.0);
        assert!(rasterize(&frame, RenderQuality::High).is_err());
    }
}
