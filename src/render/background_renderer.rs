//! Hintergrund und Raster der Zeichenfläche.

use super::types::{DrawCommand, Frame, Stroke};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Füllt die Zeichenfläche und zeichnet das quadratische Raster.
pub(crate) fn render_background(frame: &mut Frame, options: &EditorOptions) {
    let size = Vec2::new(frame.width, frame.height);
    frame.push(DrawCommand::Rect {
        min: Vec2::ZERO,
        size,
        fill: options.background_color,
    });

    if options.grid_size <= 0.0 {
        return;
    }

    let stroke = Stroke::solid(options.grid_color, options.grid_line_width);
    let columns = (size.x / options.grid_size).floor() as usize;
    for i in 0..=columns {
        let x = i as f32 * options.grid_size;
        frame.push(DrawCommand::Line {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, size.y),
            stroke: stroke.clone(),
        });
    }
    let rows = (size.y / options.grid_size).floor() as usize;
    for i in 0..=rows {
        let y = i as f32 * options.grid_size;
        frame.push(DrawCommand::Line {
            from: Vec2::new(0.0, y),
            to: Vec2::new(size.x, y),
            stroke: stroke.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_canvas_including_edges() {
        let options = EditorOptions {
            grid_size: 50.0,
            ..EditorOptions::default()
        };
        let mut frame = Frame::new(100.0, 50.0);
        render_background(&mut frame, &options);

        // 1 Rechteck + 3 vertikale + 2 horizontale Linien
        assert_eq!(frame.commands.len(), 6);
        assert!(matches!(frame.commands[0], DrawCommand::Rect { .. }));
    }

    #[test]
    fn zero_grid_size_draws_only_background() {
        let options = EditorOptions {
            grid_size: 0.0,
            ..EditorOptions::default()
        };
        let mut frame = Frame::new(100.0, 100.0);
        render_background(&mut frame, &options);
        assert_eq!(frame.commands.len(), 1);
    }
}
