use log::info;

use crate::drawing::Drawing;
use crate::error::ToolResult;
use crate::tool_state::ToolState;

/// User intents produced by the tool panel and keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolIntent {
    /// Change the brush width (clamped to the configured range)
    SetBrushWidth(f32),
    /// Select a palette entry by index
    SelectColor(usize),
    /// Remove every stroke
    Clear,
    /// Remove the most recent stroke
    Undo,
}

impl ToolIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBrushWidth(_) => "Set Brush Width",
            Self::SelectColor(_) => "Select Color",
            Self::Clear => "Clear",
            Self::Undo => "Undo",
        }
    }

    /// Apply the intent to the screen state
    pub fn apply(&self, drawing: &mut Drawing, tools: &mut ToolState) -> ToolResult<()> {
        match *self {
            Self::SetBrushWidth(width) => tools.set_brush_width(width),
            Self::SelectColor(index) => {
                tools.select_color(index)?;
            }
            Self::Clear => {
                let removed = drawing.len();
                drawing.clear();
                if removed > 0 {
                    info!("Cleared {removed} strokes");
                }
            }
            Self::Undo => {
                if drawing.undo().is_some() {
                    info!("Undo: {} strokes remain", drawing.len());
                }
            }
        }
        Ok(())
    }
}
