use anyhow::Result;

use crate::config::DrawingConfig;
use crate::draw::Color;
use crate::input::{DrawingMode, StrokeStyle, ToolState};

pub mod wayland;

/// Command-line overrides applied on top of the `[drawing]` config section.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub mode: Option<DrawingMode>,
    pub color: Option<Color>,
    pub width: Option<u32>,
}

impl StartupOptions {
    /// Resolves the initial tool state: overrides win, config fills the rest.
    pub fn tool_state(&self, drawing: &DrawingConfig) -> ToolState {
        let mode = self.mode.unwrap_or(drawing.default_mode);
        let color = self
            .color
            .unwrap_or_else(|| drawing.default_color.to_color());
        let width = self.width.unwrap_or(drawing.default_width);
        ToolState::new(mode, StrokeStyle::new(color, width))
    }
}

/// Run Wayland backend with full event loop
///
/// # Arguments
/// * `options` - Tool overrides from the command line
pub fn run_wayland(options: StartupOptions) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(options);
    backend.run()
}
