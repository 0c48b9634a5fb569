use egui::{Color32, Pos2};

/// One continuous freehand gesture: the points it passed through plus the
/// brush color and width it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    /// Start a stroke seeded with its first point
    pub fn new(start: Pos2, color: Color32, width: f32) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    // Only the drawing may grow a stroke, and only the active one.
    pub(crate) fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke that never moved past its first point renders as a dot
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}
