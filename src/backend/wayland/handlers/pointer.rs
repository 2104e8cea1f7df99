// Feeds pointer events (motion/buttons/scroll) into the sketchpad, translating each
// position against the canvas layout of that moment.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::{MouseButton, PointerSample};

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

/// Scroll direction from an axis event: positive means scrolling down.
fn scroll_direction(discrete: i32, absolute: f64) -> i32 {
    if discrete != 0 {
        discrete.signum()
    } else if absolute.abs() > 0.1 {
        if absolute > 0.0 { 1 } else { -1 }
    } else {
        0
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let sample = PointerSample::new(event.position.0, event.position.1);

            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({:.1}, {:.1})", sample.x, sample.y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    let bounds = self.layout().canvas;
                    self.sketchpad.on_pointer_motion(sample, bounds);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({:.1}, {:.1})",
                        button, sample.x, sample.y
                    );
                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    let bounds = self.layout().canvas;
                    self.sketchpad.on_pointer_down(mb, sample, bounds);
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.sketchpad.on_pointer_up(mb);
                }
                PointerEventKind::Axis { vertical, .. } => {
                    // Scroll up widens the pen, scroll down narrows it
                    match scroll_direction(vertical.discrete, vertical.absolute) {
                        d if d > 0 => self.sketchpad.adjust_width(-1),
                        d if d < 0 => self.sketchpad.adjust_width(1),
                        _ => {}
                    }
                }
            }
        }
    }
}
