//! Rendering primitives and the shape renderer (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`PaintContext`]: the path/paint operations the renderer issues
//! - [`ShapeRenderer`]: turns pointer draw events into line, rectangle and circle strokes
//! - [`Surface`]: the persistent raster canvas strokes accumulate on

pub mod color;
pub mod geometry;
pub mod paint;
pub mod renderer;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use geometry::Point;
pub use paint::PaintContext;
pub use renderer::{DrawEvent, Painter, ShapeRenderer};
pub use surface::Surface;

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
