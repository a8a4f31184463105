//! Static industry and style profiles.
//!
//! Both tables are baked into the binary. Lookups never fail: an unknown or
//! missing key resolves to [`Industry::Technology`] / [`Style::Modern`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Color, Palette};

const fn hex(rgb: u32) -> Color {
    Color::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

const fn palette(colors: [u32; 6]) -> Palette {
    Palette {
        primary: hex(colors[0]),
        secondary: hex(colors[1]),
        accent: hex(colors[2]),
        neutral: hex(colors[3]),
        background: hex(colors[4]),
        text: hex(colors[5]),
    }
}

/// Business vertical of the site being designed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    /// Software, SaaS, hardware.
    Technology,
    /// Clinics, practices, wellness.
    Healthcare,
    /// Banking, insurance, advisory.
    Finance,
    /// Schools, courses, tutoring.
    Education,
    /// Shops and e-commerce.
    Retail,
    /// Restaurants, cafes, catering.
    Restaurant,
    /// Agents and property listings.
    RealEstate,
    /// Agencies, studios, artists.
    Creative,
    /// Law firms.
    Legal,
    /// Gyms, trainers, studios.
    Fitness,
    /// Event and portrait photographers.
    Photography,
}

impl Industry {
    /// Every industry in table order.
    pub const ALL: [Self; 11] = [
        Self::Technology,
        Self::Healthcare,
        Self::Finance,
        Self::Education,
        Self::Retail,
        Self::Restaurant,
        Self::RealEstate,
        Self::Creative,
        Self::Legal,
        Self::Fitness,
        Self::Photography,
    ];

    /// Lookup key used in requests and config.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Retail => "retail",
            Self::Restaurant => "restaurant",
            Self::RealEstate => "real_estate",
            Self::Creative => "creative",
            Self::Legal => "legal",
            Self::Fitness => "fitness",
            Self::Photography => "photography",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Retail => "Retail",
            Self::Restaurant => "Restaurant",
            Self::RealEstate => "Real Estate",
            Self::Creative => "Creative",
            Self::Legal => "Legal",
            Self::Fitness => "Fitness",
            Self::Photography => "Photography",
        }
    }

    /// Exact lookup. Case and separators (`-`, space) are normalized.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|i| i.key() == normalized)
    }

    /// Resolves an optional key, falling back to `Technology`.
    #[must_use]
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(Self::from_key).unwrap_or(Self::Technology)
    }

    /// Default brand palette for the industry.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Technology => palette([0x3b82f6, 0x6366f1, 0x8b5cf6, 0x64748b, 0xffffff, 0x1e293b]),
            Self::Healthcare => palette([0x0ea5e9, 0x14b8a6, 0x22c55e, 0x64748b, 0xffffff, 0x0f172a]),
            Self::Finance => palette([0x1e3a8a, 0x0f766e, 0xca8a04, 0x6b7280, 0xffffff, 0x111827]),
            Self::Education => palette([0x2563eb, 0xf59e0b, 0x10b981, 0x6b7280, 0xffffff, 0x1f2937]),
            Self::Retail => palette([0xe11d48, 0xf97316, 0xfacc15, 0x78716c, 0xffffff, 0x1c1917]),
            Self::Restaurant => palette([0xb91c1c, 0xd97706, 0x65a30d, 0x78716c, 0xfffbeb, 0x292524]),
            Self::RealEstate => palette([0x0f766e, 0x1e40af, 0xd4af37, 0x6b7280, 0xffffff, 0x111827]),
            Self::Creative => palette([0xdb2777, 0x7c3aed, 0xf59e0b, 0x71717a, 0xffffff, 0x18181b]),
            Self::Legal => palette([0x1e293b, 0x7f1d1d, 0xb45309, 0x64748b, 0xf8fafc, 0x0f172a]),
            Self::Fitness => palette([0xea580c, 0x16a34a, 0x0ea5e9, 0x525252, 0xffffff, 0x171717]),
            Self::Photography => palette([0x171717, 0x525252, 0xf59e0b, 0xa3a3a3, 0xfafafa, 0x0a0a0a]),
        }
    }

    /// Design guidelines fed into prompts and shown in the CLI.
    #[must_use]
    pub const fn guidelines(self) -> &'static [&'static str] {
        match self {
            Self::Technology => &[
                "Use clean layouts with generous whitespace",
                "Lead with the product and a single clear call to action",
                "Blues and purples convey trust and innovation",
            ],
            Self::Healthcare => &[
                "Prioritize readability and calm, reassuring colors",
                "Surface contact details and booking above the fold",
                "Meet WCAG AA contrast on every text element",
            ],
            Self::Finance => &[
                "Project stability with deep blues and restrained accents",
                "Show credentials and security badges prominently",
                "Keep data tables and figures scannable",
            ],
            Self::Education => &[
                "Use friendly, energetic accents over a neutral base",
                "Make course discovery the primary navigation path",
                "Highlight outcomes and student testimonials",
            ],
            Self::Retail => &[
                "Let product photography carry the page",
                "Keep the cart and checkout one click away",
                "Use warm accents to draw attention to offers",
            ],
            Self::Restaurant => &[
                "Lead with food photography and opening hours",
                "Put the menu and reservations in the main navigation",
                "Warm, appetizing tones work best",
            ],
            Self::RealEstate => &[
                "Make listing search the hero interaction",
                "Use large imagery with minimal overlay text",
                "Accent gold or teal suggests premium service",
            ],
            Self::Creative => &[
                "Let the portfolio speak: full-bleed imagery, little chrome",
                "Bold accent colors can express brand personality",
                "Keep contact and booking visible on every page",
            ],
            Self::Legal => &[
                "Favor conservative typography and muted colors",
                "List practice areas clearly with plain language",
                "Offer a consultation call to action on every page",
            ],
            Self::Fitness => &[
                "Use high-energy colors and action photography",
                "Show class schedules and pricing up front",
                "Feature member transformations as social proof",
            ],
            Self::Photography => &[
                "Use a near-monochrome frame so photos stand out",
                "Organize galleries by event type",
                "Keep booking and package pricing easy to find",
            ],
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Visual style requested for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Saturated, high-energy colors.
    Vibrant,
    /// Near-monochrome with one accent.
    Minimal,
    /// Conservative blues and grays.
    Corporate,
    /// Contemporary blue/violet scheme.
    Modern,
    /// Natural browns and greens.
    Earthy,
    /// Soft, light tints.
    Pastel,
}

impl Style {
    /// Every style in table order.
    pub const ALL: [Self; 6] = [
        Self::Vibrant,
        Self::Minimal,
        Self::Corporate,
        Self::Modern,
        Self::Earthy,
        Self::Pastel,
    ];

    /// Lookup key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vibrant => "vibrant",
            Self::Minimal => "minimal",
            Self::Corporate => "corporate",
            Self::Modern => "modern",
            Self::Earthy => "earthy",
            Self::Pastel => "pastel",
        }
    }

    /// Exact, case-insensitive lookup.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|s| s.key() == normalized)
    }

    /// Resolves an optional key, falling back to `Modern`.
    #[must_use]
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(Self::from_key).unwrap_or(Self::Modern)
    }

    /// Reference palette for the style.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Vibrant => palette([0xec4899, 0x8b5cf6, 0xf59e0b, 0x6b7280, 0xffffff, 0x111827]),
            Self::Minimal => palette([0x18181b, 0x52525b, 0x2563eb, 0xa1a1aa, 0xffffff, 0x18181b]),
            Self::Corporate => palette([0x1e40af, 0x0f172a, 0x0891b2, 0x64748b, 0xffffff, 0x1e293b]),
            Self::Modern => palette([0x3b82f6, 0x6366f1, 0x8b5cf6, 0x64748b, 0xffffff, 0x1e293b]),
            Self::Earthy => palette([0x92400e, 0x65a30d, 0xd97706, 0x78716c, 0xfefce8, 0x292524]),
            Self::Pastel => palette([0xf9a8d4, 0xa5b4fc, 0x6ee7b7, 0x9ca3af, 0xfdf2f8, 0x374151]),
        }
    }

    /// How to apply colors in this style.
    #[must_use]
    pub const fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Vibrant => &[
                "Use the primary color for hero backgrounds and key headlines",
                "Reserve the accent for buttons and interactive states",
                "Balance saturated blocks with plenty of white space",
                "Limit each screen to two saturated colors at once",
            ],
            Self::Minimal => &[
                "Keep 90% of the interface neutral",
                "Use the accent only for primary actions",
                "Rely on typography weight instead of color for hierarchy",
            ],
            Self::Corporate => &[
                "Use the primary color for navigation and headers",
                "Keep body text dark on light backgrounds for readability",
                "Apply the accent sparingly to links and highlights",
            ],
            Self::Modern => &[
                "Use the primary color for calls to action and links",
                "Apply gradients between primary and secondary in hero sections",
                "Use the neutral for borders, captions and secondary text",
                "Keep backgrounds light to let accents stand out",
            ],
            Self::Earthy => &[
                "Use warm neutrals for large background areas",
                "Pair the green secondary with natural imagery",
                "Use the amber accent for buttons and badges",
            ],
            Self::Pastel => &[
                "Use pastel tints for section backgrounds",
                "Keep text dark; pastels rarely meet contrast requirements as text",
                "Use the accent for illustrations and decorative elements",
            ],
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_lookup_normalizes() {
        assert_eq!(Industry::from_key("Real Estate"), Some(Industry::RealEstate));
        assert_eq!(Industry::from_key("real-estate"), Some(Industry::RealEstate));
        assert_eq!(Industry::from_key("HEALTHCARE"), Some(Industry::Healthcare));
        assert_eq!(Industry::from_key("underwater-basket-weaving"), None);
    }

    #[test]
    fn test_industry_resolve_defaults_to_technology() {
        assert_eq!(Industry::resolve(None), Industry::Technology);
        assert_eq!(Industry::resolve(Some("")), Industry::Technology);
        assert_eq!(Industry::resolve(Some("finance")), Industry::Finance);
    }

    #[test]
    fn test_technology_palette_values() {
        let p = Industry::Technology.palette();
        assert_eq!(p.primary.to_hex(), "#3b82f6");
        assert_eq!(p.secondary.to_hex(), "#6366f1");
        assert_eq!(p.accent.to_hex(), "#8b5cf6");
        assert_eq!(p.neutral.to_hex(), "#64748b");
        assert_eq!(p.background.to_hex(), "#ffffff");
        assert_eq!(p.text.to_hex(), "#1e293b");
    }

    #[test]
    fn test_every_industry_palette_is_readable() {
        for industry in Industry::ALL {
            assert!(
                industry.palette().meets_wcag_aa(),
                "{industry} text fails contrast"
            );
            assert!(!industry.guidelines().is_empty());
        }
    }

    #[test]
    fn test_style_resolve_defaults_to_modern() {
        assert_eq!(Style::resolve(Some("Pastel")), Style::Pastel);
        assert_eq!(Style::resolve(Some("brutalist")), Style::Modern);
        assert_eq!(Style::resolve(None), Style::Modern);
    }
}
