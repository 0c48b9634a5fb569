use egui::{Color32, Key, Modifiers, Pos2, Response, Vec2};
use log::trace;

use crate::command::ToolIntent;
use crate::drawing::Drawing;

/// Canvas pointer state sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Pointer position in canvas-local coordinates
    pub pointer_pos: Option<Pos2>,
    pub drag_started: bool,
    pub dragging: bool,
    pub drag_delta: Vec2,
    pub drag_stopped: bool,
}

impl InputState {
    /// Sample the canvas response; `origin` is the canvas' top-left corner
    pub fn from_response(response: &Response, origin: Pos2) -> Self {
        Self {
            pointer_pos: response.interact_pointer_pos().map(|pos| pos - origin.to_vec2()),
            drag_started: response.drag_started(),
            dragging: response.dragged(),
            drag_delta: response.drag_delta(),
            drag_stopped: response.drag_stopped(),
        }
    }

    /// Translate this frame's pointer state into drag gesture events.
    ///
    /// egui reports `dragged` on the start frame too, so a start frame only
    /// yields `DragStart`. Frames where the pointer did not move yield no
    /// `DragMove`.
    pub fn events(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = self.pointer_pos {
            if self.drag_started {
                events.push(InputEvent::DragStart(pos));
            } else if self.dragging && self.drag_delta != Vec2::ZERO {
                events.push(InputEvent::DragMove(pos));
            }
        }

        if self.drag_stopped {
            events.push(InputEvent::DragEnd);
        }

        events
    }
}

/// One step of a drag gesture, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    DragStart(Pos2),
    DragMove(Pos2),
    DragEnd,
}

impl InputEvent {
    /// Feed the event into the drawing using the current brush
    pub fn apply(&self, drawing: &mut Drawing, color: Color32, width: f32) {
        match *self {
            Self::DragStart(pos) => drawing.begin_stroke(pos, color, width),
            Self::DragMove(pos) => {
                if !drawing.append_point(pos) {
                    trace!("Ignoring drag move at {pos:?} with no active stroke");
                }
            }
            Self::DragEnd => drawing.finalize(),
        }
    }
}

/// Keyboard shortcuts pressed this frame
pub fn shortcut_intents(ctx: &egui::Context) -> Vec<ToolIntent> {
    let mut intents = Vec::new();
    if ctx.input_mut(|input| input.consume_key(Modifiers::COMMAND, Key::Z)) {
        intents.push(ToolIntent::Undo);
    }
    intents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_frame_only_starts() {
        let input = InputState {
            pointer_pos: Some(Pos2::new(4.0, 4.0)),
            drag_started: true,
            dragging: true,
            drag_delta: Vec2::new(1.0, 0.0),
            drag_stopped: false,
        };
        assert_eq!(input.events(), vec![InputEvent::DragStart(Pos2::new(4.0, 4.0))]);
    }

    #[test]
    fn test_stationary_drag_yields_no_move() {
        let input = InputState {
            pointer_pos: Some(Pos2::new(4.0, 4.0)),
            dragging: true,
            ..Default::default()
        };
        assert!(input.events().is_empty());
    }

    #[test]
    fn test_move_and_stop() {
        let moving = InputState {
            pointer_pos: Some(Pos2::new(8.0, 2.0)),
            dragging: true,
            drag_delta: Vec2::new(4.0, -2.0),
            ..Default::default()
        };
        assert_eq!(moving.events(), vec![InputEvent::DragMove(Pos2::new(8.0, 2.0))]);

        let stopped = InputState {
            drag_stopped: true,
            ..Default::default()
        };
        assert_eq!(stopped.events(), vec![InputEvent::DragEnd]);
    }

    fn key_z(modifiers: Modifiers) -> egui::Event {
        egui::Event::Key {
            key: Key::Z,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn shortcuts_for(event: egui::Event) -> Vec<ToolIntent> {
        let ctx = egui::Context::default();
        let mut intents = Vec::new();
        let input = egui::RawInput {
            events: vec![event],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            intents = shortcut_intents(ctx);
        });
        intents
    }

    #[test]
    fn test_command_z_is_undo() {
        assert_eq!(shortcuts_for(key_z(Modifiers::COMMAND)), vec![ToolIntent::Undo]);
    }

    #[test]
    fn test_plain_z_is_not_a_shortcut() {
        assert!(shortcuts_for(key_z(Modifiers::NONE)).is_empty());
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut drawing = Drawing::new();
        InputEvent::DragMove(Pos2::new(1.0, 1.0)).apply(&mut drawing, Color32::BLACK, 5.0);
        assert!(drawing.is_empty());
    }
}
