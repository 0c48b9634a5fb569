use egui::{Color32, Painter, Pos2, Rect, Shape, Vec2};

use crate::drawing::Drawing;
use crate::stroke::Stroke;

pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Turns the stroke list into egui shapes
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: CANVAS_BACKGROUND,
        }
    }

    /// Shape for a single stroke, translated by `origin`.
    ///
    /// A one-point stroke is a filled dot of radius `width / 2`, anything
    /// longer is an open polyline through every point in order.
    pub fn stroke_shape(stroke: &Stroke, origin: Vec2) -> Option<Shape> {
        let first = *stroke.points().first()?;
        if stroke.is_dot() {
            return Some(Shape::circle_filled(
                first + origin,
                stroke.width() / 2.0,
                stroke.color(),
            ));
        }

        let points: Vec<Pos2> = stroke.points().iter().map(|p| *p + origin).collect();
        Some(Shape::line(
            points,
            egui::Stroke::new(stroke.width(), stroke.color()),
        ))
    }

    /// Shapes for every stroke in draw order
    pub fn shapes(&self, drawing: &Drawing, origin: Vec2) -> Vec<Shape> {
        drawing
            .strokes()
            .iter()
            .filter_map(|stroke| Self::stroke_shape(stroke, origin))
            .collect()
    }

    /// Paint the canvas background and the drawing into `rect`. Stroke points
    /// are canvas-local, so they are offset by the rect's top-left corner.
    pub fn render(&self, painter: &Painter, rect: Rect, drawing: &Drawing) {
        painter.rect_filled(rect, 0.0, self.background);
        painter.extend(self.shapes(drawing, rect.min.to_vec2()));
    }
}
