use egui::Slider;

use crate::command::ToolIntent;
use crate::components::ColorSwatch;
use crate::palette::PALETTE;
use crate::tool_state::ToolState;

/// Lay out the tool panel and return the intents the user triggered this
/// frame. The panel never mutates state itself.
pub fn tools_panel(ui: &mut egui::Ui, tools: &ToolState, can_undo: bool) -> Vec<ToolIntent> {
    let mut intents = Vec::new();
    let config = tools.config();

    ui.label(format!("Brush size: {}", tools.brush_width() as i32));
    let mut width = tools.brush_width();
    let slider = Slider::new(&mut width, config.width_range.clone()).show_value(false);
    if ui.add(slider).changed() {
        intents.push(ToolIntent::SetBrushWidth(width));
    }

    ui.add_space(8.0);
    ui.label("Colors:");

    for (row, colors) in PALETTE.chunks(config.palette_columns).enumerate() {
        ui.horizontal(|ui| {
            for (column, &color) in colors.iter().enumerate() {
                let index = row * config.palette_columns + column;
                let swatch = ColorSwatch::new(index, color, tools.selected_index() == index);
                if swatch.show(ui).clicked() {
                    intents.push(ToolIntent::SelectColor(index));
                }
            }
        });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            intents.push(ToolIntent::Clear);
        }
        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            intents.push(ToolIntent::Undo);
        }
    });

    intents
}
