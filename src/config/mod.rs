//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the initial tool state,
//! canvas geometry, performance tuning, UI preferences and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, PanelPosition};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, DrawingConfig, HelpOverlayStyle, PanelStyle, PerformanceConfig, UiConfig,
};

use crate::input::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest canvas edge accepted from the config file.
const MIN_CANVAS_SIZE: u32 = 64;
/// Largest canvas edge accepted from the config file.
const MAX_CANVAS_SIZE: u32 = 4096;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_width = 5
/// default_mode = "line"
///
/// [canvas]
/// width = 550
/// height = 550
///
/// [performance]
/// buffer_count = 3
/// enable_vsync = true
///
/// [ui]
/// show_panel = true
/// panel_position = "left"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool state (color, width, mode)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size and framing
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts for every control
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1 - 20
    /// - `canvas.width` / `canvas.height`: 64 - 4096
    /// - `canvas.border_width`: 0.0 - 10.0
    /// - `buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {}, clamping to {}-{} range",
                self.drawing.default_width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&*value) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to {}-{} range",
                    name,
                    value,
                    MIN_CANVAS_SIZE,
                    MAX_CANVAS_SIZE
                );
                *value = (*value).clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
            }
        }

        if !(0.0..=10.0).contains(&self.canvas.border_width) {
            log::warn!(
                "Invalid canvas border_width {:.1}, clamping to 0.0-10.0 range",
                self.canvas.border_width
            );
            self.canvas.border_width = self.canvas.border_width.clamp(0.0, 10.0);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        for (name, rgba) in [
            ("canvas.border_color", &mut self.canvas.border_color),
            ("canvas.backdrop_color", &mut self.canvas.backdrop_color),
            ("ui.panel_style.bg_color", &mut self.ui.panel_style.bg_color),
            ("ui.panel_style.text_color", &mut self.ui.panel_style.text_color),
        ] {
            for (i, component) in rgba.iter_mut().enumerate() {
                if !(0.0..=1.0).contains(&*component) {
                    log::warn!(
                        "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                        name,
                        i,
                        component
                    );
                    *component = component.clamp(0.0, 1.0);
                }
            }
        }
    }

    /// Returns the directory holding the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn config_directory() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad"))
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_directory()?.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes `config.example.toml` to the user's config directory and returns
    /// the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::input::DrawingMode;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.drawing.default_width, 5);
        assert_eq!(config.drawing.default_mode, DrawingMode::Line);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.canvas.width, 550);
        assert_eq!(config.canvas.height, 550);
        assert!(config.ui.show_panel);
    }

    #[test]
    fn parses_drawing_section() {
        let config = Config::from_toml_str(
            r##"
            [drawing]
            default_color = "#ff0000"
            default_width = 12
            default_mode = "circle"
            "##,
        )
        .unwrap();

        assert_eq!(config.drawing.default_width, 12);
        assert_eq!(config.drawing.default_mode, DrawingMode::Circle);
        assert_eq!(
            config.drawing.default_color.to_color(),
            crate::draw::color::RED
        );
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::from_toml_str(
            r#"
            [drawing]
            default_width = 40

            [canvas]
            width = 10
            height = 9000
            border_color = [2.0, -1.0, 0.5, 1.0]

            [performance]
            buffer_count = 9
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_width, 20);
        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, 4096);
        assert_eq!(config.canvas.border_color, [1.0, 0.0, 0.5, 1.0]);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let result = Config::from_toml_str(
            r#"
            [drawing]
            default_mode = "triangle"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_toml_str(include_str!("../../config.example.toml")).unwrap();
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("keybindings"));
    }
}
