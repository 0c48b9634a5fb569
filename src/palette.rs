use egui::Color32;

/// Number of colors in the fixed palette
pub const PALETTE_LEN: usize = 20;

/// The fixed brush palette, in display order.
pub const PALETTE: [Color32; PALETTE_LEN] = [
    Color32::from_rgb(0x00, 0x00, 0x00), // black
    Color32::from_rgb(0x44, 0x44, 0x44), // dark gray
    Color32::from_rgb(0x88, 0x88, 0x88), // gray
    Color32::from_rgb(0xCC, 0xCC, 0xCC), // light gray
    Color32::from_rgb(0xFF, 0xFF, 0xFF), // white
    Color32::from_rgb(0xFF, 0x00, 0x00), // red
    Color32::from_rgb(0xFF, 0x57, 0x22), // deep orange
    Color32::from_rgb(0xFF, 0x98, 0x00), // orange
    Color32::from_rgb(0xFF, 0xFF, 0x00), // yellow
    Color32::from_rgb(0xCD, 0xDC, 0x39), // lime
    Color32::from_rgb(0x00, 0xFF, 0x00), // green
    Color32::from_rgb(0x4C, 0xAF, 0x50), // material green
    Color32::from_rgb(0x00, 0xFF, 0xFF), // cyan
    Color32::from_rgb(0x00, 0x00, 0xFF), // blue
    Color32::from_rgb(0x3F, 0x51, 0xB5), // indigo
    Color32::from_rgb(0x21, 0x96, 0xF3), // material blue
    Color32::from_rgb(0x9C, 0x27, 0xB0), // purple
    Color32::from_rgb(0xFF, 0x00, 0xFF), // magenta
    Color32::from_rgb(0xE9, 0x1E, 0x63), // pink
    Color32::from_rgb(0x79, 0x55, 0x48), // brown
];

/// Look up a palette color by index
pub fn color_at(index: usize) -> Option<Color32> {
    PALETTE.get(index).copied()
}
