//! Keyboard modifier state tracking.

use super::events::Key;

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt) are currently pressed so
/// keybindings like `Ctrl+Q` can be matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a modifier press or release. Returns `false` for non-modifier keys.
    pub fn update(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Shift => self.shift = pressed,
            Key::Ctrl => self.ctrl = pressed,
            Key::Alt => self.alt = pressed,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tracks_modifier_keys_only() {
        let mut modifiers = Modifiers::new();
        assert!(modifiers.update(Key::Ctrl, true));
        assert!(modifiers.ctrl);
        assert!(!modifiers.update(Key::Char('a'), true));
        assert!(modifiers.update(Key::Ctrl, false));
        assert_eq!(modifiers, Modifiers::new());
    }
}
