//! Palette derivation by hue rotation.

use serde::Serialize;

use crate::models::{Color, HslColor, Industry, Palette, Style};

/// Saturation multiplier applied to both triadic colors.
pub const TRIADIC_SATURATION_FACTOR: f64 = 0.8;

/// Number of colors returned by [`derive_complementary_colors`].
pub const DERIVED_COLOR_COUNT: usize = 4;

/// Every harmony derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonySet {
    /// The base color.
    pub base: Color,
    /// Hue + 180°.
    pub complementary: Color,
    /// Hue + 120° and + 240°, with reduced saturation.
    pub triadic: [Color; 2],
    /// Hue + 30° and − 30°.
    pub analogous: [Color; 2],
}

impl HarmonySet {
    /// The five derived colors in generation order:
    /// complementary, triadic +120, triadic +240, analogous +30, analogous −30.
    #[must_use]
    pub const fn candidates(&self) -> [Color; 5] {
        [
            self.complementary,
            self.triadic[0],
            self.triadic[1],
            self.analogous[0],
            self.analogous[1],
        ]
    }
}

/// Computes all color harmonies for `base`.
#[must_use]
pub fn harmony_set(base: Color) -> HarmonySet {
    let hsl = base.to_hsl();
    let triadic_saturation = (hsl.s * TRIADIC_SATURATION_FACTOR).min(1.0);

    HarmonySet {
        base,
        complementary: hsl.rotate(180.0).to_color(),
        triadic: [
            hsl.rotate(120.0).with_saturation(triadic_saturation).to_color(),
            hsl.rotate(240.0).with_saturation(triadic_saturation).to_color(),
        ],
        analogous: [hsl.rotate(30.0).to_color(), hsl.rotate(-30.0).to_color()],
    }
}

/// Derives four companion colors from a primary color.
///
/// The order is fixed: complementary, triadic 1, triadic 2, analogous +30°.
/// The analogous −30° candidate is generated but not returned.
///
/// ```
/// use designkit::heuristics::derive_complementary_colors;
/// use designkit::models::Color;
///
/// let derived = derive_complementary_colors(Color::from_hex("#ff0000").unwrap());
/// assert_eq!(derived[0].to_hex(), "#00ffff");
/// ```
#[must_use]
pub fn derive_complementary_colors(primary: Color) -> [Color; DERIVED_COLOR_COUNT] {
    let [complementary, triadic_1, triadic_2, analogous_plus, _analogous_minus] =
        harmony_set(primary).candidates();
    [complementary, triadic_1, triadic_2, analogous_plus]
}

/// Builds a full palette around a single brand color.
///
/// Secondary is the first triadic color, accent the complement; neutral and
/// text are low-saturation tints of the primary hue so the palette reads as
/// one family.
#[must_use]
pub fn palette_from_primary(primary: Color) -> Palette {
    let harmonies = harmony_set(primary);
    let hsl = primary.to_hsl();

    Palette {
        primary,
        secondary: harmonies.triadic[0],
        accent: harmonies.complementary,
        neutral: HslColor::new(hsl.h, 0.15, 0.45).to_color(),
        background: Color::WHITE,
        text: HslColor::new(hsl.h, 0.4, 0.15).to_color(),
    }
}

/// Default palette for an industry key.
///
/// Unknown or absent industries always get the technology palette.
#[must_use]
pub fn industry_default_palette(industry: Option<&str>) -> Palette {
    Industry::resolve(industry).palette()
}

/// Usage guidance for a style key; unknown styles get the `modern` list.
#[must_use]
pub fn color_usage_recommendations(style: &str) -> Vec<String> {
    Style::resolve(Some(style))
        .recommendations()
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_hex).collect()
    }

    #[test]
    fn test_derive_exact_order_for_brand_blue() {
        let derived = derive_complementary_colors(Color::from_hex("#3b82f6").unwrap());
        assert_eq!(
            hexes(&derived),
            vec!["#f6af3b", "#e34e86", "#86e34e", "#513bf6"]
        );
    }

    #[test]
    fn test_derive_for_pure_red() {
        let derived = derive_complementary_colors(Color::new(255, 0, 0));
        assert_eq!(
            hexes(&derived),
            vec!["#00ffff", "#19e619", "#1919e6", "#ff8000"]
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let primary = Color::from_hex("#10b981").unwrap();
        assert_eq!(
            derive_complementary_colors(primary),
            derive_complementary_colors(primary)
        );
    }

    #[test]
    fn test_gray_derives_gray() {
        let gray = Color::from_hex("#808080").unwrap();
        assert!(derive_complementary_colors(gray).iter().all(|c| *c == gray));
    }

    #[test]
    fn test_harmony_set_keeps_discarded_analogous() {
        let set = harmony_set(Color::from_hex("#3b82f6").unwrap());
        assert_eq!(set.analogous[1].to_hex(), "#3bdff6");
        assert_eq!(set.candidates().len(), 5);
    }

    #[test]
    fn test_palette_from_primary() {
        let primary = Color::from_hex("#3b82f6").unwrap();
        let palette = palette_from_primary(primary);
        assert_eq!(palette.primary, primary);
        assert_eq!(palette.secondary.to_hex(), "#e34e86");
        assert_eq!(palette.accent.to_hex(), "#f6af3b");
        assert_eq!(palette.neutral.to_hex(), "#626f84");
        assert_eq!(palette.text.to_hex(), "#172336");
        assert_eq!(palette.background, Color::WHITE);
        assert!(palette.meets_wcag_aa());
    }

    #[test]
    fn test_unknown_industry_gets_technology_palette() {
        let palette = industry_default_palette(Some("underwater-basket-weaving"));
        assert_eq!(palette, Industry::Technology.palette());
        assert_eq!(industry_default_palette(None), Industry::Technology.palette());
        assert_eq!(
            industry_default_palette(Some("restaurant")),
            Industry::Restaurant.palette()
        );
    }

    #[test]
    fn test_color_usage_recommendations_fallback() {
        assert_eq!(
            color_usage_recommendations("brutalist"),
            color_usage_recommendations("modern")
        );
        assert_ne!(
            color_usage_recommendations("pastel"),
            color_usage_recommendations("modern")
        );
        assert!(!color_usage_recommendations("minimal").is_empty());
    }
}
