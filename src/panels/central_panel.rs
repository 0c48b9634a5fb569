use crate::drawing::Drawing;
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::tool_state::ToolState;

/// The drawing canvas: fills the remaining space, turns drags into strokes
/// and paints the drawing.
pub fn central_panel(
    ctx: &egui::Context,
    drawing: &mut Drawing,
    tools: &ToolState,
    renderer: &Renderer,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        let input = InputState::from_response(&response, canvas_rect.min);
        for event in input.events() {
            event.apply(drawing, tools.brush_color(), tools.brush_width());
        }

        renderer.render(&painter, canvas_rect, drawing);
    });
}
