mod actions;
mod core;
mod mouse;

pub use core::Sketchpad;
