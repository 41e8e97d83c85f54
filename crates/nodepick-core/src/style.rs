//! Colours used when drawing the scene.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from a `0xRRGGBB` value.
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colours for the three visual states of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Hover highlight, also used for the pointer indicator.
    pub hover: SerializableColor,
    /// Selection highlight.
    pub selected: SerializableColor,
    /// Base fill/stroke of every shape.
    pub base: SerializableColor,
}

impl Palette {
    pub const DEFAULT_HOVER: SerializableColor = SerializableColor::from_rgb_hex(0xee2cee);
    pub const DEFAULT_SELECTED: SerializableColor = SerializableColor::from_rgb_hex(0x1d58cd);
    pub const DEFAULT_BASE: SerializableColor = SerializableColor::from_rgb_hex(0xff7f50);

    pub fn hover(&self) -> Color {
        self.hover.into()
    }

    pub fn selected(&self) -> Color {
        self.selected.into()
    }

    pub fn base(&self) -> Color {
        self.base.into()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hover: Self::DEFAULT_HOVER,
            selected: Self::DEFAULT_SELECTED,
            base: Self::DEFAULT_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_hex() {
        assert_eq!(
            SerializableColor::from_rgb_hex(0xee2cee),
            SerializableColor::new(0xee, 0x2c, 0xee, 255)
        );
        assert_eq!(SerializableColor::from_rgb_hex(0x000000), SerializableColor::black());
    }

    #[test]
    fn test_color_conversion() {
        let original = SerializableColor::new(29, 88, 205, 255);
        let color: Color = original.into();
        assert_eq!(SerializableColor::from(color), original);
    }

    #[test]
    fn test_palette_partial_json_keeps_defaults() {
        let palette: Palette =
            serde_json::from_str(r#"{"base": {"r": 0, "g": 0, "b": 0, "a": 255}}"#).unwrap();
        assert_eq!(palette.base, SerializableColor::black());
        assert_eq!(palette.hover, Palette::DEFAULT_HOVER);
        assert_eq!(palette.selected, Palette::DEFAULT_SELECTED);
    }
}
