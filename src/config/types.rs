//! Configuration type definitions.

use super::enums::{ColorSpec, PanelPosition};
use crate::draw::surface::DEFAULT_CANVAS_SIZE;
use crate::input::{DEFAULT_STROKE_WIDTH, DrawingMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state when the sketchpad first opens. Users can change
/// these values at runtime using keybindings and the scroll wheel.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - a named color, a `#rrggbb` hex string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1 - 20)
    #[serde(default = "default_width")]
    pub default_width: u32,

    /// Drawing mode selected at startup (line, rectangle, circle)
    #[serde(default)]
    pub default_mode: DrawingMode,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_mode: DrawingMode::default(),
        }
    }
}

/// Canvas geometry and framing.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Width of the border drawn around the canvas
    #[serde(default = "default_border_width")]
    pub border_width: f64,

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_border_color")]
    pub border_color: [f64; 4],

    /// Viewport color behind the canvas [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_backdrop_color")]
    pub backdrop_color: [f64; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            border_width: default_border_width(),
            border_color: default_border_color(),
            backdrop_color: default_backdrop_color(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the control panel with the current mode, color and width
    #[serde(default = "default_show_panel")]
    pub show_panel: bool,

    /// Side of the canvas the panel is placed on
    #[serde(default = "default_panel_position")]
    pub panel_position: PanelPosition,

    /// Panel styling options
    #[serde(default)]
    pub panel_style: PanelStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_panel: default_show_panel(),
            panel_position: default_panel_position(),
            panel_style: PanelStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Control panel styling configuration.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PanelStyle {
    /// Font size for panel text
    #[serde(default = "default_panel_font_size")]
    pub font_size: f64,

    /// Inner padding and gap between panel and canvas
    #[serde(default = "default_panel_padding")]
    pub padding: f64,

    /// Panel width in pixels
    #[serde(default = "default_panel_width")]
    pub width: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_text_color")]
    pub text_color: [f64; 4],

    /// Size of the color swatch square
    #[serde(default = "default_panel_swatch_size")]
    pub swatch_size: f64,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            font_size: default_panel_font_size(),
            padding: default_panel_padding(),
            width: default_panel_width(),
            bg_color: default_panel_bg_color(),
            text_color: default_panel_text_color(),
            swatch_size: default_panel_swatch_size(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000".to_string())
}

fn default_width() -> u32 {
    DEFAULT_STROKE_WIDTH
}

fn default_canvas_size() -> u32 {
    DEFAULT_CANVAS_SIZE
}

fn default_border_width() -> f64 {
    1.0
}

fn default_border_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_backdrop_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_show_panel() -> bool {
    true
}

fn default_panel_position() -> PanelPosition {
    PanelPosition::Left
}

fn default_panel_font_size() -> f64 {
    16.0
}

fn default_panel_padding() -> f64 {
    28.0
}

fn default_panel_width() -> f64 {
    240.0
}

fn default_panel_bg_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_panel_text_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_panel_swatch_size() -> f64 {
    18.0
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    16.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
