//! Drawing mode, stroke style and the tool state that owns them.

use crate::draw::{Color, color::BLACK, color::WHITE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Narrowest stroke the width control allows.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Widest stroke the width control allows.
pub const MAX_STROKE_WIDTH: u32 = 20;
/// Stroke width used when nothing else is configured.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Which geometry a drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DrawingMode {
    /// Segment from the previous pointer position to the current one
    #[default]
    Line,
    /// Outline anchored at the previous position, opposite corner at the current one
    Rectangle,
    /// Outline centred on the previous position, passing through the current one
    Circle,
}

impl DrawingMode {
    /// Every mode, in selector order.
    pub const ALL: [DrawingMode; 3] = [
        DrawingMode::Line,
        DrawingMode::Rectangle,
        DrawingMode::Circle,
    ];

    /// Lowercase identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Line => "line",
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Circle => "circle",
        }
    }

    /// Human-readable label for the control panel.
    pub fn label(&self) -> &'static str {
        match self {
            DrawingMode::Line => "Line",
            DrawingMode::Rectangle => "Rectangle",
            DrawingMode::Circle => "Circle",
        }
    }

    /// The mode after this one in selector order, wrapping around.
    pub fn next(&self) -> DrawingMode {
        match self {
            DrawingMode::Line => DrawingMode::Rectangle,
            DrawingMode::Rectangle => DrawingMode::Circle,
            DrawingMode::Circle => DrawingMode::Line,
        }
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drawing mode '{0}' (expected line, rectangle or circle)")]
pub struct ModeParseError(pub String);

impl FromStr for DrawingMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(DrawingMode::Line),
            "rectangle" | "rect" => Ok(DrawingMode::Rectangle),
            "circle" => Ok(DrawingMode::Circle),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

/// Stroke color and width applied to every paint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    width: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StrokeStyle {
    /// Creates a style, clamping `width` into the allowed range.
    pub fn new(color: Color, width: u32) -> Self {
        Self {
            color,
            width: width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
        }
    }

    /// Stroke width in pixels, always within `MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH`.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sets the width, clamping out-of-range values.
    pub fn set_width(&mut self, width: u32) {
        self.width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    /// Adjusts the width by `delta`, clamping to the allowed range.
    pub fn adjust_width(&mut self, delta: i32) {
        self.set_width(self.width.saturating_add_signed(delta));
    }
}

/// Receives notification when the selected drawing mode changes.
///
/// The observer may rewrite the stroke style (e.g. switch to the eraser color).
pub trait ModeObserver {
    fn on_mode_changed(
        &mut self,
        previous: DrawingMode,
        current: DrawingMode,
        style: &mut StrokeStyle,
    );
}

/// Caller-owned drawing settings read by the renderer at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolState {
    mode: DrawingMode,
    pub style: StrokeStyle,
}

impl ToolState {
    pub fn new(mode: DrawingMode, style: StrokeStyle) -> Self {
        Self { mode, style }
    }

    /// Currently selected drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Selects `mode`, notifying `observer` if it differs from the current one.
    ///
    /// Returns `true` when the mode actually changed.
    pub fn set_mode(&mut self, mode: DrawingMode, observer: &mut dyn ModeObserver) -> bool {
        if self.mode == mode {
            return false;
        }
        let previous = std::mem::replace(&mut self.mode, mode);
        observer.on_mode_changed(previous, mode, &mut self.style);
        true
    }

    /// Switches the stroke color to the canvas background so strokes erase.
    pub fn erase(&mut self) {
        self.style.color = WHITE;
    }
}
