//! 24-bit RGB color with strict hex parsing and lower-case serialization.

// Allow float comparisons in the luminance math (standard WCAG formula)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::HslColor;

/// Errors raised when a string cannot be interpreted as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex color (`#RRGGBB` or `RRGGBB`).
    #[error("invalid color format '{input}': expected 6 hex digits (#RRGGBB)")]
    InvalidColorFormat {
        /// The rejected input, as given.
        input: String,
    },
}

/// RGB color value with hex string representation.
///
/// Each channel is a `u8`, so the `[0,255]` invariant holds by construction.
/// Parsing accepts upper- or lower-case digits with or without the leading `#`;
/// the canonical form produced by [`Color::to_hex`] is always 7 characters,
/// lower-case, `#`-prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Pure white, the default background.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// Pure black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Creates a new `Color` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `Color` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use designkit::models::Color;
    ///
    /// let color = Color::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, Color::new(255, 0, 0));
    ///
    /// assert!(Color::from_hex("#GG0000").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat {
            input: hex.to_string(),
        };

        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        // from_str_radix tolerates a leading '+', so check every byte first
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lower-case).
    ///
    /// ```
    /// use designkit::models::Color;
    ///
    /// assert_eq!(Color::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to HSL.
    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        HslColor::from(*self)
    }

    /// Relative luminance as defined by WCAG 2.x, in `[0,1]`.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio against another color, in `[1,21]`.
    ///
    /// The ratio is symmetric: `a.contrast_ratio(&b) == b.contrast_ratio(&a)`.
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Returns the color with its HSL lightness raised by `amount` (0.0-1.0).
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        hsl.with_lightness(hsl.l + amount).to_color()
    }

    /// Returns the color with its HSL lightness lowered by `amount` (0.0-1.0).
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        hsl.with_lightness(hsl.l - amount).to_color()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl Default for Color {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::WHITE
    }
}
