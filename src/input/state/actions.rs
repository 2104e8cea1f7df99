use crate::config::Action;
use crate::draw::color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
use crate::input::{events::Key, tool::DrawingMode};
use log::{debug, info, warn};

/// Digits in a full `#rrggbb` color.
const MAX_HEX_DIGITS: usize = 6;

use super::Sketchpad;

impl Sketchpad {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. While a color entry is
    /// open every other key goes to it. Otherwise the key is looked up in the
    /// keybinding map together with the held modifiers and the bound action,
    /// if any, is executed.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        if self.color_entry.is_some() {
            self.on_color_entry_key(key);
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        debug!("Key pressed: {} ({:?})", key_str, self.modifiers);
        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event. Only modifier state is affected.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Executes an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                if self.tracker.is_active() {
                    // Abandon the stroke first; a second press exits
                    self.tracker.deactivate();
                } else {
                    info!("Exit requested");
                    self.should_exit = true;
                }
            }
            Action::SelectLine => self.select_mode(DrawingMode::Line),
            Action::SelectRectangle => self.select_mode(DrawingMode::Rectangle),
            Action::SelectCircle => self.select_mode(DrawingMode::Circle),
            Action::CycleMode => {
                let next = self.tools.mode().next();
                self.select_mode(next);
            }
            Action::ClearCanvas => self.clear_canvas(),
            Action::Erase => self.erase(),
            Action::IncreaseWidth => self.adjust_width(1),
            Action::DecreaseWidth => self.adjust_width(-1),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::TogglePanel => {
                self.show_panel = !self.show_panel;
                self.needs_redraw = true;
            }
            Action::EnterColorHex => {
                debug!("Color entry opened");
                self.color_entry = Some(String::new());
                self.needs_redraw = true;
            }
            Action::SetColorRed => self.set_color(RED),
            Action::SetColorGreen => self.set_color(GREEN),
            Action::SetColorBlue => self.set_color(BLUE),
            Action::SetColorYellow => self.set_color(YELLOW),
            Action::SetColorOrange => self.set_color(ORANGE),
            Action::SetColorPink => self.set_color(PINK),
            Action::SetColorWhite => self.set_color(WHITE),
            Action::SetColorBlack => self.set_color(BLACK),
        }
    }

    /// Feeds a key into the open color entry.
    ///
    /// Hex digits accumulate up to six, Backspace removes the last one and
    /// Escape abandons the entry. Return applies `#<digits>` as the stroke
    /// color; an incomplete value is rejected and the color stays as it was.
    fn on_color_entry_key(&mut self, key: Key) {
        let Some(digits) = self.color_entry.as_mut() else {
            return;
        };

        match key {
            Key::Char(c) if c.is_ascii_hexdigit() => {
                if digits.len() < MAX_HEX_DIGITS {
                    digits.push(c.to_ascii_lowercase());
                }
            }
            Key::Backspace => {
                digits.pop();
            }
            Key::Escape => {
                debug!("Color entry cancelled");
                self.color_entry = None;
            }
            Key::Return => {
                let hex = format!("#{}", digits);
                self.color_entry = None;
                match self.set_color_hex(&hex) {
                    Ok(()) => info!("Stroke color set to {}", hex),
                    Err(err) => warn!("Ignoring color entry: {}", err),
                }
            }
            _ => return,
        }
        self.needs_redraw = true;
    }
}
