use egui::Color32;
use log::{info, warn};

use crate::config::ToolConfig;
use crate::error::{ToolError, ToolResult};
use crate::palette::{self, PALETTE_LEN};

/// Current brush width and color. Width stays inside the configured range
/// and the color is always a palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    config: ToolConfig,
    brush_width: f32,
    color_index: usize,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(ToolConfig::default())
    }
}

impl ToolState {
    /// Create tool state from a config. An invalid config falls back to the
    /// defaults.
    pub fn new(config: ToolConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid tool config ({e}), using defaults");
                ToolConfig::default()
            }
        };

        Self {
            brush_width: config.default_width,
            color_index: config.default_color_index,
            config,
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    /// Set the brush width, clamped to the configured range. Non-finite
    /// widths are ignored.
    pub fn set_brush_width(&mut self, width: f32) {
        if !width.is_finite() {
            warn!("Ignoring non-finite brush width {width}");
            return;
        }
        self.brush_width = width.clamp(self.config.min_width(), self.config.max_width());
    }

    pub fn brush_color(&self) -> Color32 {
        palette::PALETTE[self.color_index]
    }

    pub fn selected_index(&self) -> usize {
        self.color_index
    }

    /// Select a palette entry by index
    pub fn select_color(&mut self, index: usize) -> ToolResult<Color32> {
        let color = palette::color_at(index).ok_or(ToolError::PaletteIndexOutOfRange {
            index,
            len: PALETTE_LEN,
        })?;
        self.color_index = index;
        info!("Brush color set to palette entry {index} ({color:?})");
        Ok(color)
    }
}
