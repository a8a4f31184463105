//! Data models for colors, palettes, layouts and design suggestions.
//!
//! Everything here is a transient value object: created per request, computed,
//! returned and discarded. Models are independent of the AI layer and of any
//! transport.

pub mod color;
pub mod hsl;
pub mod layout;
pub mod metrics;
pub mod palette;
pub mod profile;
pub mod request;
pub mod suggestion;

// Re-export all model types
pub use color::{Color, ColorError};
pub use hsl::{hex_to_hsl, hsl_to_hex, normalize_hue, HslColor};
pub use layout::{
    Breakpoints, GridSystem, Layout, LayoutSection, Priority, SectionKind, SectionPosition,
};
pub use metrics::{OptimizationMetrics, MAX_SCORE};
pub use palette::{Palette, PaletteRole};
pub use profile::{Industry, Style};
pub use request::{ColorRequest, ContentRequest, LayoutRequest, SeoRequest, DEFAULT_PAGE_TYPE};
pub use suggestion::{
    ColorScheme, ContentSuggestions, LayoutSuggestion, SeoSuggestions, Suggestion,
    SuggestionSource,
};
