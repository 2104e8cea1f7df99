//! RGBA color type, hex parsing and predefined color constants.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let parsed = Color::from_hex("#f00").unwrap();
/// assert_eq!(red, parsed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string is not a valid `#rgb` / `#rrggbb` hex value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a CSS-style hex color as emitted by color pickers.
    ///
    /// Accepts `#rgb` and `#rrggbb`; the leading `#` is optional and digits are
    /// case-insensitive. Short form digits are doubled (`#f80` == `#ff8800`).
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(input.to_string()));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16);
        let (r, g, b) = match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
                (expand(0), expand(1), expand(2))
            }
            6 => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ),
            _ => return Err(ColorParseError::BadLength(input.to_string())),
        };

        match (r, g, b) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::from_rgb8(r, g, b)),
            _ => Err(ColorParseError::BadDigit(input.to_string())),
        }
    }

    /// Formats the color as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color, also the eraser and canvas background color.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color, the default stroke color.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::from_hex("#000").unwrap(), BLACK);
        assert_eq!(Color::from_hex("#fff").unwrap(), WHITE);
        assert_eq!(Color::from_hex("FF0000").unwrap(), RED);
        assert_eq!(Color::from_hex(" #00ff00 ").unwrap(), GREEN);
    }

    #[test]
    fn short_hex_doubles_digits() {
        let color = Color::from_hex("#f80").unwrap();
        assert_eq!(color, Color::from_rgb8(0xff, 0x88, 0x00));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            Color::from_hex("#ffff"),
            Err(ColorParseError::BadLength("#ffff".to_string()))
        );
        assert_eq!(
            Color::from_hex("#ggg"),
            Err(ColorParseError::BadDigit("#ggg".to_string()))
        );
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn to_hex_formats_lowercase() {
        assert_eq!(ORANGE.to_hex(), "#ff8000");
        assert_eq!(Color::from_hex("#1A2b3C").unwrap().to_hex(), "#1a2b3c");
    }
}
