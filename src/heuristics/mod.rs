//! Deterministic design heuristics.
//!
//! Palette derivation, layout scoring and the fallback producers used when the
//! AI designer cannot get a usable answer. Nothing in here performs I/O.

pub mod fallback;
pub mod palette;
pub mod scoring;

pub use fallback::{
    fallback_color_scheme, fallback_content_suggestions, fallback_layout_suggestion,
    generate_fallback_layout, industry_seo_fallback, industry_seo_fallback_with_rng,
    FALLBACK_PAGE_TYPES,
};
pub use palette::{
    color_usage_recommendations, derive_complementary_colors, harmony_set,
    industry_default_palette, palette_from_primary, HarmonySet, DERIVED_COLOR_COUNT,
    TRIADIC_SATURATION_FACTOR,
};
pub use scoring::{
    calculate_content_complexity, calculate_optimization_metrics, layout_recommendations,
    MAX_CONTENT_COMPLEXITY,
};
