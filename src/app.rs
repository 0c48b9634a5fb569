use log::{info, warn};

use crate::command::ToolIntent;
use crate::config::ToolConfig;
use crate::drawing::Drawing;
use crate::input;
use crate::panels;
use crate::renderer::Renderer;
use crate::tool_state::ToolState;

/// The single doodle screen: tool panel on top, canvas below.
#[derive(Debug, Default)]
pub struct DoodleApp {
    drawing: Drawing,
    tools: ToolState,
    renderer: Renderer,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ToolConfig) -> Self {
        info!("Starting doodle with brush range {:?}", config.width_range);
        Self::with_config(config)
    }

    /// Build the app without a window, e.g. for tests
    pub fn with_config(config: ToolConfig) -> Self {
        Self {
            drawing: Drawing::new(),
            tools: ToolState::new(config),
            renderer: Renderer::new(),
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn drawing_mut(&mut self) -> &mut Drawing {
        &mut self.drawing
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    /// Apply an intent from the tool panel or a shortcut. Rejected intents
    /// are logged and dropped.
    pub fn handle_intent(&mut self, intent: ToolIntent) {
        if let Err(e) = intent.apply(&mut self.drawing, &mut self.tools) {
            warn!("{} failed: {e}", intent.name());
        }
    }
}

impl eframe::App for DoodleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = input::shortcut_intents(ctx);

        egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            intents.extend(panels::tools_panel(
                ui,
                &self.tools,
                !self.drawing.is_empty(),
            ));
            ui.add_space(4.0);
        });

        for intent in intents {
            self.handle_intent(intent);
        }

        panels::central_panel(ctx, &mut self.drawing, &self.tools, &self.renderer);
    }
}
