use egui::{Color32, Pos2};
use log::{debug, trace};

use crate::state::GestureState;
use crate::stroke::Stroke;

/// Ordered stroke store. Insertion order is draw order; while a drag is
/// active the last stroke is the only one that grows.
#[derive(Debug, Default, Clone)]
pub struct Drawing {
    strokes: Vec<Stroke>,
    gesture: GestureState,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new stroke seeded with `start` and make it the active stroke.
    /// Any gesture still in progress is finalized first.
    pub fn begin_stroke(&mut self, start: Pos2, color: Color32, width: f32) {
        if self.gesture.is_dragging() {
            self.finalize();
        }
        self.strokes.push(Stroke::new(start, color, width));
        self.set_gesture(GestureState::Dragging);
        debug!("Stroke {} started at {:?}", self.strokes.len(), start);
    }

    /// Extend the active stroke. Returns false if no drag is in progress.
    pub fn append_point(&mut self, point: Pos2) -> bool {
        if !self.gesture.is_dragging() {
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.push_point(point);
                true
            }
            None => {
                self.set_gesture(GestureState::Idle);
                false
            }
        }
    }

    /// End the current gesture; the active stroke stops receiving points.
    pub fn finalize(&mut self) {
        if !self.gesture.is_dragging() {
            return;
        }
        self.set_gesture(GestureState::Idle);
        if let Some(stroke) = self.strokes.last() {
            debug!(
                "Stroke {} finished with {} points",
                self.strokes.len(),
                stroke.len()
            );
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.set_gesture(GestureState::Idle);
    }

    /// Remove the most recent stroke, if any. Undoing mid-drag drops the
    /// active stroke and ends the gesture.
    pub fn undo(&mut self) -> Option<Stroke> {
        let removed = self.strokes.pop();
        if removed.is_some() {
            self.set_gesture(GestureState::Idle);
        }
        removed
    }

    fn set_gesture(&mut self, gesture: GestureState) {
        if self.gesture != gesture {
            trace!("Gesture {} -> {}", self.gesture.name(), gesture.name());
            self.gesture = gesture;
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The stroke currently being extended, if a drag is active
    pub fn active_stroke(&self) -> Option<&Stroke> {
        if self.gesture.is_dragging() {
            self.strokes.last()
        } else {
            None
        }
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
