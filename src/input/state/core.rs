//! Sketchpad session state: tool settings, canvas and UI flags.

use crate::config::{Action, KeyBinding};
use crate::draw::{Color, ColorParseError, ShapeRenderer, Surface, color::WHITE};
use crate::input::{
    modifiers::Modifiers,
    tool::{DrawingMode, ModeObserver, StrokeStyle, ToolState},
    tracker::PointerTracker,
};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Main session state owning everything the user can change.
///
/// Holds the tool settings, the persistent canvas surface and the pointer
/// tracker that paints onto it, plus the keybinding map and UI flags. The
/// backend feeds it pointer and keyboard events and reads the flags to decide
/// when to redraw or exit.
pub struct Sketchpad {
    /// Drawing mode and stroke style read at paint time
    pub(super) tools: ToolState,
    /// Persistent raster canvas
    pub(super) surface: Surface,
    /// Gates the pointer stream into draw events
    pub(super) tracker: PointerTracker<ShapeRenderer>,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to exit the sketchpad
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible (toggled with F10)
    pub show_help: bool,
    /// Whether the control panel is currently visible (toggled with F12)
    pub show_panel: bool,
    /// Hex digits typed so far while a color entry is open
    pub(super) color_entry: Option<String>,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

/// Clears the canvas and switches to the eraser color when the mode changes.
struct CanvasReset<'a> {
    surface: &'a Surface,
    tracker: &'a mut PointerTracker<ShapeRenderer>,
}

impl ModeObserver for CanvasReset<'_> {
    fn on_mode_changed(
        &mut self,
        previous: DrawingMode,
        current: DrawingMode,
        style: &mut StrokeStyle,
    ) {
        info!("Drawing mode changed: {} -> {}", previous, current);
        clear_surface(self.surface, self.tracker);
        style.color = WHITE;
    }
}

fn clear_surface(surface: &Surface, tracker: &mut PointerTracker<ShapeRenderer>) {
    match surface.context() {
        Ok(mut ctx) => tracker.clear(&mut ctx, surface.background()),
        Err(err) => warn!("Failed to clear canvas: {:#}", err),
    }
}

impl Sketchpad {
    /// Creates a session drawing onto `surface` with the given tool settings.
    pub fn new(
        tools: ToolState,
        surface: Surface,
        action_map: HashMap<KeyBinding, Action>,
        show_panel: bool,
    ) -> Self {
        Self {
            tools,
            surface,
            tracker: PointerTracker::default(),
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_panel,
            color_entry: None,
            action_map,
        }
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Hex digits of the color entry in progress, if one is open.
    pub fn color_entry(&self) -> Option<&str> {
        self.color_entry.as_deref()
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tracker.is_active()
    }

    /// Selects a drawing mode.
    ///
    /// Changing to a different mode clears the canvas and switches the stroke
    /// color to white. Re-selecting the current mode does nothing.
    pub fn select_mode(&mut self, mode: DrawingMode) {
        let mut reset = CanvasReset {
            surface: &self.surface,
            tracker: &mut self.tracker,
        };
        if self.tools.set_mode(mode, &mut reset) {
            self.needs_redraw = true;
        }
    }

    /// Wipes the canvas back to its background and switches the stroke color to white.
    ///
    /// A stroke in progress stays active and restarts from the next move.
    pub fn clear_canvas(&mut self) {
        clear_surface(&self.surface, &mut self.tracker);
        info!("Canvas cleared");
        self.erase();
    }

    /// Switches the stroke color to white; existing pixels are untouched.
    pub fn erase(&mut self) {
        self.tools.erase();
        self.needs_redraw = true;
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.style.color = color;
        self.needs_redraw = true;
    }

    /// Sets the stroke color from a `#rgb` or `#rrggbb` string.
    ///
    /// The color is left unchanged if the string does not parse.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        let color = Color::from_hex(hex)?;
        self.set_color(color);
        Ok(())
    }

    /// Adjusts the stroke width by `delta`, clamped to the allowed range.
    pub fn adjust_width(&mut self, delta: i32) {
        let before = self.tools.style.width();
        self.tools.style.adjust_width(delta);
        let after = self.tools.style.width();
        if before != after {
            debug!("Stroke width adjusted: {} -> {}", before, after);
            self.needs_redraw = true;
        }
    }

    /// Look up an action for the given key and modifiers.
    ///
    /// Symbol keys such as `+` or `_` need Shift to be typed at all, so a
    /// binding written without Shift still matches them.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        let Modifiers { ctrl, shift, alt } = self.modifiers;
        let lookup = |shift: bool| {
            self.action_map
                .iter()
                .find(|(binding, _)| binding.matches(key_str, ctrl, shift, alt))
                .map(|(_, action)| *action)
        };

        lookup(shift).or_else(|| {
            let mut chars = key_str.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if shift && !c.is_alphanumeric() => lookup(false),
                _ => None,
            }
        })
    }
}
