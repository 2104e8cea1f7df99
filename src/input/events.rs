//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key (applies a hex color entry)
    Return,
    /// Backspace key (edits a hex color entry)
    Backspace,
    /// Tab key (cycles drawing mode)
    Tab,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// F10 function key (toggle help)
    F10,
    /// F12 function key (toggle control panel)
    F12,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used to look the key up in the keybinding map.
    ///
    /// Returns `None` for modifiers and unrecognized keys.
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_string()),
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::F10 => "F10",
            Key::F12 => "F12",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (drawing button)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_skip_modifiers() {
        assert_eq!(Key::Char('+').binding_name().as_deref(), Some("+"));
        assert_eq!(Key::F10.binding_name().as_deref(), Some("F10"));
        assert_eq!(Key::Tab.binding_name().as_deref(), Some("Tab"));
        assert!(Key::Shift.binding_name().is_none());
        assert!(Key::Unknown.binding_name().is_none());
    }
}
