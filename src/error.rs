use thiserror::Error;

/// Errors raised while validating a [`crate::config::ToolConfig`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid brush width range: {min}..={max}")]
    InvalidWidthRange { min: f32, max: f32 },

    #[error("Default brush width {width} is outside {min}..={max}")]
    DefaultWidthOutOfRange { width: f32, min: f32, max: f32 },

    #[error("Default palette index {index} is out of range (palette has {len} colors)")]
    DefaultColorOutOfRange { index: usize, len: usize },

    #[error("Palette must be laid out in at least one column")]
    ZeroPaletteColumns,
}

/// Errors raised by tool state changes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Palette index {index} is out of range (palette has {len} colors)")]
    PaletteIndexOutOfRange { index: usize, len: usize },
}

pub type ToolResult<T> = Result<T, ToolError>;
