//! HSL color space and the hex <-> HSL conversion pipeline.

// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names

use serde::{Deserialize, Serialize};

use super::{Color, ColorError};

/// A color in Hue-Saturation-Lightness space.
///
/// - `h` (Hue): degrees in `[0,360)`
/// - `s` (Saturation): `[0,1]`
/// - `l` (Lightness): `[0,1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl HslColor {
    /// Creates an HSL color, wrapping the hue into `[0,360)` and clamping
    /// saturation and lightness into `[0,1]`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Rotates the hue by `degrees` (may be negative), keeping s and l.
    #[must_use]
    pub fn rotate(&self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Same hue and lightness with a new saturation.
    #[must_use]
    pub fn with_saturation(&self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Same hue and saturation with a new lightness.
    #[must_use]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Converts back to an RGB color.
    ///
    /// Fully desaturated colors map to gray (`r = g = b = l`). Otherwise the
    /// standard hue-to-RGB helper is applied at hue offsets +1/3, 0, -1/3.
    #[must_use]
    pub fn to_color(&self) -> Color {
        let h = normalize_hue(self.h) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Color::new(to_channel(r), to_channel(g), to_channel(b))
    }
}

impl From<Color> for HslColor {
    fn from(color: Color) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, report 0
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: normalize_hue(h * 60.0),
            s,
            l,
        }
    }
}

impl From<HslColor> for Color {
    fn from(hsl: HslColor) -> Self {
        hsl.to_color()
    }
}

/// Parses a 6-digit hex string and converts it to HSL.
///
/// ```
/// use designkit::models::hex_to_hsl;
///
/// let red = hex_to_hsl("#ff0000").unwrap();
/// assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));
/// ```
pub fn hex_to_hsl(hex: &str) -> Result<HslColor, ColorError> {
    Color::from_hex(hex).map(HslColor::from)
}

/// Converts an HSL color to its canonical lower-case `#rrggbb` string.
///
/// ```
/// use designkit::models::{hsl_to_hex, HslColor};
///
/// assert_eq!(hsl_to_hex(HslColor::new(120.0, 1.0, 0.5)), "#00ff00");
/// ```
#[must_use]
pub fn hsl_to_hex(hsl: HslColor) -> String {
    hsl.to_color().to_hex()
}

/// Wraps any hue in degrees into `[0,360)`.
#[must_use]
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
