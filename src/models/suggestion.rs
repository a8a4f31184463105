//! Result types handed back to callers of the AI designer.
//!
//! Every result is wrapped in a [`Suggestion`] that records whether the data
//! came from the upstream model or from the deterministic fallbacks. The data
//! shape is identical either way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Color, Layout, OptimizationMetrics, Palette};

/// Where a suggestion's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// Parsed from the model's response.
    Generated,
    /// Produced by the deterministic fallbacks.
    Fallback,
}

/// A suggestion envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion<T> {
    /// Unique id for the suggestion.
    pub id: Uuid,
    /// Origin of the data.
    pub source: SuggestionSource,
    /// Creation time (UTC).
    pub generated_at: DateTime<Utc>,
    /// Payload.
    #[serde(flatten)]
    pub data: T,
}

impl<T> Suggestion<T> {
    /// Wraps data with a fresh id and timestamp.
    #[must_use]
    pub fn new(source: SuggestionSource, data: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            generated_at: Utc::now(),
            data,
        }
    }

    /// True if the data came from the fallbacks.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == SuggestionSource::Fallback
    }
}

/// A palette plus the derived colors and usage guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    /// The six-role palette.
    pub palette: Palette,
    /// Complementary, triadic and analogous colors derived from the primary.
    pub derived: Vec<Color>,
    /// How to apply the palette.
    pub recommendations: Vec<String>,
    /// Short explanation of the choice.
    pub rationale: String,
    /// Whether text on background meets WCAG AA.
    pub wcag_aa: bool,
}

/// A layout plus its locally computed scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSuggestion {
    /// Proposed layout.
    pub layout: Layout,
    /// Scores for the layout.
    pub metrics: OptimizationMetrics,
    /// Improvements for each score bonus not earned.
    pub recommendations: Vec<String>,
}

/// SEO metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSuggestions {
    /// `<title>`; about 60 characters is the target.
    pub title: String,
    /// Meta description; about 160 characters is the target.
    pub meta_description: String,
    /// Target keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Main heading.
    #[serde(default)]
    pub h1: String,
    /// Secondary headings.
    #[serde(default)]
    pub h2: Vec<String>,
    /// Open Graph title.
    #[serde(default)]
    pub og_title: String,
    /// Open Graph description.
    #[serde(default)]
    pub og_description: String,
}

/// Suggested copy for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestions {
    /// Headline.
    pub headline: String,
    /// Supporting line under the headline.
    #[serde(default)]
    pub subheadline: String,
    /// Button label.
    #[serde(default)]
    pub call_to_action: String,
    /// Body paragraphs.
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Tone the copy is written in.
    #[serde(default)]
    pub tone: String,
}
