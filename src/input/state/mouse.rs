use crate::input::{
    events::MouseButton,
    tracker::{PointerSample, SurfaceBounds},
};
use log::{debug, warn};

use super::Sketchpad;

impl Sketchpad {
    /// Processes a pointer button press.
    ///
    /// A left press inside `bounds` starts a stroke; presses elsewhere, or
    /// with other buttons, are ignored.
    pub fn on_pointer_down(
        &mut self,
        button: MouseButton,
        sample: PointerSample,
        bounds: SurfaceBounds,
    ) {
        if button != MouseButton::Left {
            return;
        }

        if !bounds.contains(sample) {
            debug!(
                "Press at ({:.1}, {:.1}) outside canvas, ignoring",
                sample.x, sample.y
            );
            return;
        }

        debug!("Stroke started at ({:.1}, {:.1})", sample.x, sample.y);
        self.tracker.activate();
    }

    /// Processes pointer motion anywhere in the viewport.
    ///
    /// `bounds` is the canvas placement at the time of this event. While a
    /// stroke is active every move paints onto the canvas, even outside it;
    /// Cairo clips whatever falls beyond the edges.
    pub fn on_pointer_motion(&mut self, sample: PointerSample, bounds: SurfaceBounds) {
        if !self.tracker.is_active() {
            return;
        }

        let mut ctx = match self.surface.context() {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Skipping pointer move: {:#}", err);
                return;
            }
        };

        if self.tracker.on_move(sample, bounds, &mut ctx, &self.tools) {
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer button release.
    ///
    /// Only the left button ends the stroke, since only a left press starts
    /// one. Releasing another button mid-drag leaves it running.
    pub fn on_pointer_up(&mut self, button: MouseButton) {
        if button == MouseButton::Left && self.tracker.is_active() {
            debug!("Stroke finished");
            self.tracker.deactivate();
        }
    }
}
