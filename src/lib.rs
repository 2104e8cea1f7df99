//! Library exports for the sketchpad drawing surface.
//!
//! Exposes the drawing core (tool state, pointer tracker, shape renderer and
//! canvas) alongside configuration and UI rendering so that the binaries and
//! integration tests share one implementation.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
