//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which side of the canvas the control panel sits on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PanelPosition {
    /// Panel to the left of the canvas
    Left,
    /// Panel to the right of the canvas
    Right,
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color, as produced by color pickers
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or `#rgb`/`#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings starting with `#` are parsed as hex, other strings are looked up
    /// as color names. Anything unrecognised falls back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) if name.trim_start().starts_with('#') => Color::from_hex(name)
                .unwrap_or_else(|err| {
                    warn!("{}, using black", err);
                    BLACK
                }),
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{ORANGE, RED};

    #[test]
    fn color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("Red".to_string()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#ff0000".to_string()).to_color(), RED);
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color(),
            Color::from_rgb8(255, 0, 0)
        );
        assert_eq!(ColorSpec::Name("orange".to_string()).to_color(), ORANGE);
    }

    #[test]
    fn color_spec_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("chartreuse".to_string()).to_color(), BLACK);
        assert_eq!(ColorSpec::Name("#12".to_string()).to_color(), BLACK);
    }
}
