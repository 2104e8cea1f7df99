//! Input handling and tool state.
//!
//! This module translates backend keyboard and pointer events into drawing actions.
//! It owns the current tool state (mode, color, width), the pointer tracker that
//! gates the pointer stream into draw events, and the [`Sketchpad`] session that
//! ties them to the persistent canvas.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;
pub mod tracker;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::Sketchpad;
pub use tool::{
    DEFAULT_STROKE_WIDTH, DrawingMode, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, ModeObserver,
    ModeParseError, StrokeStyle, ToolState,
};
pub use tracker::{PointerSample, PointerTracker, SurfaceBounds};
