#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod drawing;
pub mod error;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tool_state;

pub use app::DoodleApp;
pub use command::ToolIntent;
pub use config::{AppConfig, ToolConfig};
pub use drawing::Drawing;
pub use error::{ConfigError, ToolError};
pub use input::{InputEvent, InputState};
pub use renderer::Renderer;
pub use state::GestureState;
pub use stroke::Stroke;
pub use tool_state::ToolState;
