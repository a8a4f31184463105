//! Six-role brand palette.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Color;

/// A named role within a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    /// Main brand color.
    Primary,
    /// Supporting brand color.
    Secondary,
    /// Highlight for calls to action and emphasis.
    Accent,
    /// Borders, muted text and dividers.
    Neutral,
    /// Page background.
    Background,
    /// Body text.
    Text,
}

impl PaletteRole {
    /// All roles in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::Background,
        Self::Text,
    ];

    /// Lower-case key used in JSON and prompts.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Background => "background",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete palette. Every role is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Main brand color.
    pub primary: Color,
    /// Supporting brand color.
    pub secondary: Color,
    /// Highlight color.
    pub accent: Color,
    /// Muted color for borders and secondary text.
    pub neutral: Color,
    /// Page background.
    pub background: Color,
    /// Body text.
    pub text: Color,
}

impl Palette {
    /// Returns the color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Primary => self.primary,
            PaletteRole::Secondary => self.secondary,
            PaletteRole::Accent => self.accent,
            PaletteRole::Neutral => self.neutral,
            PaletteRole::Background => self.background,
            PaletteRole::Text => self.text,
        }
    }

    /// Replaces the color assigned to `role`.
    pub fn set(&mut self, role: PaletteRole, color: Color) {
        match role {
            PaletteRole::Primary => self.primary = color,
            PaletteRole::Secondary => self.secondary = color,
            PaletteRole::Accent => self.accent = color,
            PaletteRole::Neutral => self.neutral = color,
            PaletteRole::Background => self.background = color,
            PaletteRole::Text => self.text = color,
        }
    }

    /// Iterates `(role, color)` pairs in canonical order.
    pub fn roles(&self) -> impl Iterator<Item = (PaletteRole, Color)> + '_ {
        PaletteRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Contrast ratio between text and background.
    #[must_use]
    pub fn text_contrast(&self) -> f64 {
        self.text.contrast_ratio(&self.background)
    }

    /// True when body text meets WCAG AA (4.5:1) against the background.
    #[must_use]
    pub fn meets_wcag_aa(&self) -> bool {
        self.text_contrast() >= 4.5
    }
}
