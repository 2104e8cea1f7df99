// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides layout and rendering helpers used across them.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell}, shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    input::Sketchpad,
    ui::{self, Layout},
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Drawing session
    pub(super) sketchpad: Sketchpad,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        sketchpad: Sketchpad,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            sketchpad,
        }
    }

    /// Canvas and panel placement for the current surface size.
    ///
    /// Recomputed on every use so resizes and panel toggles take effect on the
    /// very next pointer event.
    pub(super) fn layout(&self) -> Layout {
        ui::compute_layout(
            self.surface.width(),
            self.surface.height(),
            &self.config.canvas,
            &self.config.ui,
            self.sketchpad.show_panel,
        )
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are dropped before the buffer is committed to Wayland
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Viewport backdrop
        let [r, g, b, a] = self.config.canvas.backdrop_color;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(r, g, b, a);
        ctx.paint().context("Failed to paint backdrop")?;
        ctx.set_operator(cairo::Operator::Over);

        let layout = self.layout();
        debug!(
            "Canvas at ({}, {}), panel {:?}",
            layout.canvas.x, layout.canvas.y, layout.panel
        );

        self.sketchpad
            .surface()
            .blit(&ctx, layout.canvas.x, layout.canvas.y)?;
        ui::render_canvas_border(&ctx, layout.canvas, &self.config.canvas);

        if let Some(panel) = layout.panel {
            ui::render_panel(
                &ctx,
                panel,
                self.sketchpad.tools(),
                self.sketchpad.color_entry(),
                &self.config.ui.panel_style,
            );
        }

        if self.sketchpad.show_help {
            ui::render_help_overlay(&ctx, &self.config.ui.help_overlay_style, width, height);
        }

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
