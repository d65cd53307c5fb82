//! RGB colors and hexadecimal color code parsing.

use crate::error::{Error, Result};

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hexadecimal color code of the form `#rrggbb` or `rrggbb`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::color::Color;
    ///
    /// let red = Color::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0));
    ///
    /// assert!(Color::from_hex("#f00").is_err());
    /// assert!(Color::from_hex("not a color").is_err());
    /// ```
    pub fn from_hex(code: &str) -> Result<Self> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        let invalid = || Error::InvalidColor(format!("#{}", digits));
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
        Ok(Self { r, g, b })
    }

    /// Channel values scaled to the 0.0-1.0 range used by PDF `rg` operators.
    pub fn to_components(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl Default for Color {
    /// The default stamp color, red.
    fn default() -> Self {
        Self { r: 255, g: 0, b: 0 }
    }
}
