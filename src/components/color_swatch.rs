use egui::{Color32, Stroke};

pub const SWATCH_SIZE: f32 = 32.0;

/// Round palette button. The selected swatch gets a thick white ring, the
/// rest a thin black one.
pub struct ColorSwatch {
    pub index: usize,
    pub color: Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(index: usize, color: Color32, selected: bool) -> Self {
        Self {
            index,
            color,
            selected,
        }
    }

    /// Stable widget id for the swatch of a palette entry
    pub fn id_for(index: usize) -> egui::Id {
        egui::Id::new(("palette_swatch", index))
    }

    pub fn border(&self) -> Stroke {
        if self.selected {
            Stroke::new(3.0, Color32::WHITE)
        } else {
            Stroke::new(1.0, Color32::BLACK)
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(SWATCH_SIZE, SWATCH_SIZE);
        let (_, rect) = ui.allocate_space(size);
        let response = ui.interact(rect, Self::id_for(self.index), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let border = self.border();
            let radius = SWATCH_SIZE / 2.0 - border.width / 2.0;
            let painter = ui.painter();
            painter.circle_filled(rect.center(), radius, self.color);
            painter.circle_stroke(rect.center(), radius, border);
        }

        response
    }
}
