// Responds to layer-shell configure/close events, keeping the viewport size in sync with the compositor.
use log::info;
use smithay_client_toolkit::shell::wlr_layer::{
    LayerShellHandler, LayerSurface, LayerSurfaceConfigure,
};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl LayerShellHandler for WaylandState {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        info!("Layer surface closed by compositor");
        self.sketchpad.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _layer: &LayerSurface,
        configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        let (width, height) = configure.new_size;
        info!("Layer surface configured: {}x{}", width, height);

        if width > 0 && height > 0 && self.surface.update_dimensions(width, height) {
            let layout = self.layout();
            info!(
                "Viewport resized, canvas now at ({}, {})",
                layout.canvas.x, layout.canvas.y
            );
        }

        self.surface.set_configured(true);
        self.sketchpad.needs_redraw = true;
    }
}
