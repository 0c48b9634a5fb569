use std::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::palette::PALETTE_LEN;

/// Brush and palette settings for the tool panel
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    /// Allowed brush widths, inclusive
    pub width_range: RangeInclusive<f32>,
    /// Brush width on startup
    pub default_width: f32,
    /// Palette index selected on startup
    pub default_color_index: usize,
    /// Swatches per palette row
    pub palette_columns: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            width_range: 5.0..=60.0,
            default_width: 20.0,
            default_color_index: 0,
            palette_columns: 10,
        }
    }
}

impl ToolConfig {
    pub fn min_width(&self) -> f32 {
        *self.width_range.start()
    }

    pub fn max_width(&self) -> f32 {
        *self.width_range.end()
    }

    /// Check that the configuration describes a usable tool panel
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_width(), self.max_width());
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidWidthRange { min, max });
        }

        let width = self.default_width;
        if !self.width_range.contains(&width) {
            return Err(ConfigError::DefaultWidthOutOfRange { width, min, max });
        }

        if self.default_color_index >= PALETTE_LEN {
            return Err(ConfigError::DefaultColorOutOfRange {
                index: self.default_color_index,
                len: PALETTE_LEN,
            });
        }

        if self.palette_columns == 0 {
            return Err(ConfigError::ZeroPaletteColumns);
        }

        Ok(())
    }
}

/// Window settings for the native shell
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub initial_size: [f32; 2],
    pub min_size: [f32; 2],
    pub tools: ToolConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Doodle".to_owned(),
            initial_size: [480.0, 800.0],
            min_size: [360.0, 480.0],
            tools: ToolConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.initial_size)
                .with_min_inner_size(self.min_size),
            ..Default::default()
        }
    }
}
