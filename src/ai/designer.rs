//! AI-assisted design suggestions with deterministic fallbacks.
//!
//! Every operation asks the completion client for JSON, parses it, checks it
//! and resolves it into the public result type. Any failure on that path (no
//! client, transport error, unparseable or unusable reply) is logged and the
//! matching fallback from [`crate::heuristics`] is returned instead, so callers
//! always get a well-typed [`Suggestion`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::client::{
    ChatMessage, CompletionClient, CompletionError, CompletionRequest, HttpCompletionClient,
    OfflineClient,
};
use super::parse::{parse_structured, ParseError};
use super::prompts;
use crate::config::{Config, DefaultsConfig};
use crate::heuristics::{
    calculate_optimization_metrics, color_usage_recommendations, derive_complementary_colors,
    fallback_color_scheme, fallback_content_suggestions, fallback_layout_suggestion,
    industry_seo_fallback, layout_recommendations,
};
use crate::models::{
    Color, ColorRequest, ColorScheme, ContentRequest, ContentSuggestions, Layout, LayoutRequest,
    LayoutSuggestion, PaletteRole, SeoRequest, SeoSuggestions, Suggestion, SuggestionSource,
};

/// Why a generated answer was not used.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The client failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),
    /// The reply did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The reply parsed but is unusable.
    #[error("rejected response: {0}")]
    Rejected(&'static str),
}

/// Palette as the model returns it; every role may be missing or malformed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPalette {
    /// Primary.
    pub primary: Option<String>,
    /// Secondary.
    pub secondary: Option<String>,
    /// Accent.
    pub accent: Option<String>,
    /// Neutral.
    pub neutral: Option<String>,
    /// Background.
    pub background: Option<String>,
    /// Text.
    pub text: Option<String>,
}

impl RawPalette {
    fn role(&self, role: PaletteRole) -> Option<&str> {
        match role {
            PaletteRole::Primary => self.primary.as_deref(),
            PaletteRole::Secondary => self.secondary.as_deref(),
            PaletteRole::Accent => self.accent.as_deref(),
            PaletteRole::Neutral => self.neutral.as_deref(),
            PaletteRole::Background => self.background.as_deref(),
            PaletteRole::Text => self.text.as_deref(),
        }
    }
}

/// Color scheme as the model returns it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawColorScheme {
    /// Role colors.
    pub palette: RawPalette,
    /// Explanation.
    pub rationale: Option<String>,
    /// Usage guidance.
    pub recommendations: Vec<String>,
}

/// Turns a generated scheme into a [`ColorScheme`].
///
/// Roles that are missing or not valid hex are taken from the fallback scheme
/// for the same request. Derived colors and the WCAG flag are always computed
/// locally. Fails when no role at all is usable.
pub fn resolve_color_scheme(
    raw: RawColorScheme,
    request: &ColorRequest,
) -> Result<ColorScheme, GenerationError> {
    let fallback = fallback_color_scheme(request);
    let mut palette = fallback.palette;
    let mut repaired = Vec::new();

    for role in PaletteRole::ALL {
        match raw.palette.role(role).map(Color::from_hex) {
            Some(Ok(color)) => palette.set(role, color),
            _ => repaired.push(role.key()),
        }
    }

    if repaired.len() == PaletteRole::ALL.len() {
        return Err(GenerationError::Rejected("palette has no valid colors"));
    }
    if !repaired.is_empty() {
        debug!(roles = ?repaired, "Repaired palette roles from fallback");
    }

    let recommendations = if raw.recommendations.is_empty() {
        color_usage_recommendations(request.style().key())
    } else {
        raw.recommendations
    };

    Ok(ColorScheme {
        derived: derive_complementary_colors(palette.primary).to_vec(),
        recommendations,
        rationale: raw
            .rationale
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(fallback.rationale),
        wcag_aa: palette.meets_wcag_aa(),
        palette,
    })
}

/// Scores a generated layout locally; scores sent by the model are ignored.
pub fn resolve_layout(
    layout: Layout,
    request: &LayoutRequest,
) -> Result<LayoutSuggestion, GenerationError> {
    if layout.sections.is_empty() {
        return Err(GenerationError::Rejected("layout has no sections"));
    }

    Ok(LayoutSuggestion {
        metrics: calculate_optimization_metrics(&layout, request),
        recommendations: layout_recommendations(&layout, request),
        layout,
    })
}

/// Rejects SEO answers without a title or description.
pub fn resolve_seo(seo: SeoSuggestions) -> Result<SeoSuggestions, GenerationError> {
    if seo.title.trim().is_empty() || seo.meta_description.trim().is_empty() {
        return Err(GenerationError::Rejected("empty title or description"));
    }
    Ok(seo)
}

/// Rejects copy without a headline.
pub fn resolve_content(
    content: ContentSuggestions,
) -> Result<ContentSuggestions, GenerationError> {
    if content.headline.trim().is_empty() {
        return Err(GenerationError::Rejected("empty headline"));
    }
    Ok(content)
}

/// Design assistant backed by a completion client.
#[derive(Clone)]
pub struct AiDesigner {
    client: Arc<dyn CompletionClient>,
    max_tokens: u32,
    temperature: f32,
    defaults: DefaultsConfig,
}

impl std::fmt::Debug for AiDesigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiDesigner")
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl AiDesigner {
    /// Creates a designer with default generation settings.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        let ai = crate::config::AiConfig::default();
        Self {
            client,
            max_tokens: ai.max_tokens,
            temperature: ai.temperature,
            defaults: DefaultsConfig::default(),
        }
    }

    /// Creates a designer from configuration.
    ///
    /// Uses the HTTP client when an API key is available and the offline
    /// client otherwise.
    pub fn from_config(config: &Config) -> Self {
        let client: Arc<dyn CompletionClient> = match HttpCompletionClient::from_config(&config.ai)
        {
            Ok(client) => {
                info!(model = %config.ai.model, "AI suggestions enabled");
                Arc::new(client)
            }
            Err(e) => {
                info!("AI suggestions disabled, using fallbacks: {}", e);
                Arc::new(OfflineClient)
            }
        };

        Self {
            client,
            max_tokens: config.ai.max_tokens,
            temperature: config.ai.temperature,
            defaults: config.defaults.clone(),
        }
    }

    /// Applies request defaults (industry, style) from configuration.
    pub fn with_defaults(mut self, defaults: DefaultsConfig) -> Self {
        self.defaults = defaults;
        self
    }

    fn completion_request(&self, prompt: String) -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system(prompts::SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    async fn generate<T: DeserializeOwned>(&self, prompt: String) -> Result<T, GenerationError> {
        let response = self
            .client
            .complete(&self.completion_request(prompt))
            .await?;
        Ok(parse_structured(&response)?)
    }

    fn default_industry(&self, industry: &mut Option<String>) {
        if industry.is_none() {
            industry.clone_from(&self.defaults.industry);
        }
    }

    /// Suggests a color scheme.
    pub async fn suggest_palette(&self, request: &ColorRequest) -> Suggestion<ColorScheme> {
        let mut request = request.clone();
        self.default_industry(&mut request.industry);
        if request.style.is_none() {
            request.style.clone_from(&self.defaults.style);
        }

        let generated = self
            .generate::<RawColorScheme>(prompts::palette_prompt(&request))
            .await
            .and_then(|raw| resolve_color_scheme(raw, &request));

        match generated {
            Ok(scheme) => {
                info!("Generated color scheme");
                Suggestion::new(SuggestionSource::Generated, scheme)
            }
            Err(e) => {
                warn!("Palette generation failed, using fallback: {}", e);
                Suggestion::new(SuggestionSource::Fallback, fallback_color_scheme(&request))
            }
        }
    }

    /// Proposes a layout and scores it.
    pub async fn optimize_layout(&self, request: &LayoutRequest) -> Suggestion<LayoutSuggestion> {
        let mut request = request.clone();
        self.default_industry(&mut request.industry);

        let generated = self
            .generate::<Layout>(prompts::layout_prompt(&request))
            .await
            .and_then(|layout| resolve_layout(layout, &request));

        match generated {
            Ok(suggestion) => {
                info!(
                    sections = suggestion.layout.section_count(),
                    overall = suggestion.metrics.overall(),
                    "Generated layout"
                );
                Suggestion::new(SuggestionSource::Generated, suggestion)
            }
            Err(e) => {
                warn!("Layout generation failed, using fallback: {}", e);
                Suggestion::new(SuggestionSource::Fallback, fallback_layout_suggestion(&request))
            }
        }
    }

    /// Suggests SEO metadata.
    pub async fn suggest_seo(&self, request: &SeoRequest) -> Suggestion<SeoSuggestions> {
        let mut request = request.clone();
        self.default_industry(&mut request.industry);

        let generated = self
            .generate::<SeoSuggestions>(prompts::seo_prompt(&request))
            .await
            .and_then(resolve_seo);

        match generated {
            Ok(seo) => {
                info!("Generated SEO metadata");
                Suggestion::new(SuggestionSource::Generated, seo)
            }
            Err(e) => {
                warn!("SEO generation failed, using fallback: {}", e);
                Suggestion::new(
                    SuggestionSource::Fallback,
                    industry_seo_fallback(
                        request.industry.as_deref(),
                        request.business_name.as_deref(),
                    ),
                )
            }
        }
    }

    /// Suggests copy for one section.
    pub async fn suggest_content(&self, request: &ContentRequest) -> Suggestion<ContentSuggestions> {
        let mut request = request.clone();
        self.default_industry(&mut request.industry);

        let generated = self
            .generate::<ContentSuggestions>(prompts::content_prompt(&request))
            .await
            .and_then(resolve_content);

        match generated {
            Ok(content) => {
                info!(section = %request.section, "Generated section copy");
                Suggestion::new(SuggestionSource::Generated, content)
            }
            Err(e) => {
                warn!("Content generation failed, using fallback: {}", e);
                Suggestion::new(
                    SuggestionSource::Fallback,
                    fallback_content_suggestions(
                        request.industry(),
                        &request.section,
                        request.business_name.as_deref(),
                    ),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Industry;

    #[test]
    fn test_resolve_color_scheme_repairs_invalid_roles() {
        let raw = RawColorScheme {
            palette: RawPalette {
                primary: Some("#10b981".to_string()),
                secondary: Some("teal-ish".to_string()),
                text: Some("#111111".to_string()),
                ..RawPalette::default()
            },
            rationale: None,
            recommendations: Vec::new(),
        };
        let request = ColorRequest::default();
        let scheme = resolve_color_scheme(raw, &request).unwrap();
        let fallback = fallback_color_scheme(&request);

        assert_eq!(scheme.palette.primary.to_hex(), "#10b981");
        assert_eq!(scheme.palette.secondary, fallback.palette.secondary);
        assert_eq!(scheme.palette.text.to_hex(), "#111111");
        assert_eq!(scheme.derived, derive_complementary_colors(scheme.palette.primary).to_vec());
        assert_eq!(scheme.rationale, fallback.rationale);
    }

    #[test]
    fn test_resolve_color_scheme_rejects_empty_palette() {
        assert!(matches!(
            resolve_color_scheme(RawColorScheme::default(), &ColorRequest::default()),
            Err(GenerationError::Rejected(_))
        ));
    }

    #[test]
    fn test_resolve_layout_rejects_empty() {
        assert!(resolve_layout(Layout::default(), &LayoutRequest::default()).is_err());
    }

    #[test]
    fn test_resolve_seo_rejects_blank_title() {
        let seo = industry_seo_fallback(Some("legal"), None);
        assert!(resolve_seo(seo.clone()).is_ok());
        assert!(resolve_seo(SeoSuggestions {
            title: "  ".to_string(),
            ..seo
        })
        .is_err());
    }

    #[tokio::test]
    async fn test_offline_designer_uses_defaults_from_config() {
        let designer = AiDesigner::new(Arc::new(OfflineClient)).with_defaults(DefaultsConfig {
            industry: Some("restaurant".to_string()),
            style: None,
        });
        let suggestion = designer.suggest_palette(&ColorRequest::default()).await;
        assert!(suggestion.is_fallback());
        assert_eq!(suggestion.data.palette, Industry::Restaurant.palette());
    }
}
