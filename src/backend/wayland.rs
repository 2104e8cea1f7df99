// Wayland backend using wlr-layer-shell for a fullscreen drawing surface.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
