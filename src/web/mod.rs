//! Web API module for designkit.
//!
//! This module exposes the design heuristics and the AI designer over a small
//! JSON REST API for website builders.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/colors/{hex}/hsl` - Convert a hex color to HSL
//! - `POST /api/colors/hex` - Convert HSL to a hex color
//! - `GET /api/colors/{hex}/derived` - Four derived harmony colors
//! - `GET /api/colors/{hex}/harmonies` - Every harmony of a color
//! - `GET /api/palettes/{industry}` - Industry default palette
//! - `GET /api/styles/{style}/recommendations` - Color usage guidance
//! - `POST /api/layouts/metrics` - Score a layout
//! - `POST /api/content/complexity` - Score content complexity
//! - `GET /api/fallback/layouts/{page_type}` - Default layout for a page type
//! - `GET /api/fallback/seo/{industry}` - Default SEO metadata (optional ?businessName=)
//! - `POST /api/ai/palette` - AI color scheme
//! - `POST /api/ai/layout` - AI layout with local scores
//! - `POST /api/ai/seo` - AI SEO metadata
//! - `POST /api/ai/content` - AI section copy
//!
//! Colors in paths are six hex digits; a leading `#` must be sent as `%23`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::ai::AiDesigner;
use crate::config::Config;
use crate::heuristics::{
    calculate_content_complexity, calculate_optimization_metrics, color_usage_recommendations,
    derive_complementary_colors, generate_fallback_layout, harmony_set, industry_seo_fallback,
    layout_recommendations, HarmonySet, MAX_CONTENT_COMPLEXITY,
};
use crate::models::{
    Color, ColorRequest, ColorScheme, ContentRequest, ContentSuggestions, HslColor, Industry,
    Layout, LayoutRequest, LayoutSuggestion, OptimizationMetrics, Palette, SeoRequest,
    SeoSuggestions, Style, Suggestion,
};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Designer used by the /api/ai endpoints
    designer: AiDesigner,
}

impl AppState {
    /// Creates a new application state with a designer built from `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let designer = AiDesigner::from_config(&config);
        Self::with_designer(config, designer)
    }

    /// Creates a new application state with an explicit designer.
    #[must_use]
    pub fn with_designer(config: Config, designer: AiDesigner) -> Self {
        Self {
            config: Arc::new(config),
            designer,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Model the AI endpoints ask
    pub model: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// Hex and HSL forms of one color.
#[derive(Debug, Serialize)]
pub struct ColorResponse {
    /// Hex form
    pub hex: Color,
    /// HSL form
    pub hsl: HslColor,
}

/// HSL input for `POST /api/colors/hex`.
#[derive(Debug, Deserialize)]
pub struct HslInput {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0-1)
    pub s: f64,
    /// Lightness (0-1)
    pub l: f64,
}

/// Derived colors response.
#[derive(Debug, Serialize)]
pub struct DerivedResponse {
    /// The input color
    pub primary: Color,
    /// Complementary, triadic, triadic, analogous
    pub derived: Vec<Color>,
}

/// Industry palette response.
#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    /// Resolved industry key
    pub industry: String,
    /// Default palette
    pub palette: Palette,
    /// Design guidance for the industry
    pub guidelines: Vec<String>,
}

/// Style recommendations response.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Resolved style key
    pub style: String,
    /// Usage guidance
    pub recommendations: Vec<String>,
}

/// Layout scoring request.
#[derive(Debug, Deserialize)]
pub struct LayoutMetricsRequest {
    /// Layout to score
    pub layout: Layout,
    /// Context for the accessibility score
    #[serde(default)]
    pub request: LayoutRequest,
}

/// Layout scoring response.
#[derive(Debug, Serialize)]
pub struct LayoutMetricsResponse {
    /// Per-axis scores
    pub metrics: OptimizationMetrics,
    /// Mean of the four scores
    pub overall: u8,
    /// Improvements for missed bonuses
    pub recommendations: Vec<String>,
}

/// Content complexity response.
#[derive(Debug, Serialize)]
pub struct ComplexityResponse {
    /// Score in 0..=max
    pub complexity: u8,
    /// Upper bound
    pub max: u8,
}

/// Query for the SEO fallback.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoQuery {
    /// Business name substituted into titles
    pub business_name: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

fn parse_hex(hex: &str) -> Result<Color, (StatusCode, Json<ApiError>)> {
    Color::from_hex(hex).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid color", e.to_string())),
        )
    })
}

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.config().ai.model.clone(),
    })
}

/// GET /api/colors/{hex}/hsl - Convert hex to HSL.
async fn color_to_hsl(Path(hex): Path<String>) -> ApiResult<ColorResponse> {
    let color = parse_hex(&hex)?;
    Ok(Json(ColorResponse {
        hex: color,
        hsl: color.to_hsl(),
    }))
}

/// POST /api/colors/hex - Convert HSL to hex.
async fn color_from_hsl(Json(input): Json<HslInput>) -> ApiResult<ColorResponse> {
    let in_unit = |v: f64| (0.0..=1.0).contains(&v);
    if !input.h.is_finite() || !in_unit(input.s) || !in_unit(input.l) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                "Hue must be finite; saturation and lightness must be between 0 and 1",
            )),
        ));
    }

    let hsl = HslColor::new(input.h, input.s, input.l);
    Ok(Json(ColorResponse {
        hex: hsl.to_color(),
        hsl,
    }))
}

/// GET /api/colors/{hex}/derived - Four derived colors.
async fn derived_colors(Path(hex): Path<String>) -> ApiResult<DerivedResponse> {
    let primary = parse_hex(&hex)?;
    Ok(Json(DerivedResponse {
        primary,
        derived: derive_complementary_colors(primary).to_vec(),
    }))
}

/// GET /api/colors/{hex}/harmonies - Every harmony.
async fn color_harmonies(Path(hex): Path<String>) -> ApiResult<HarmonySet> {
    let base = parse_hex(&hex)?;
    Ok(Json(harmony_set(base)))
}

/// GET /api/palettes/{industry} - Industry default palette.
async fn industry_palette(Path(industry): Path<String>) -> Json<PaletteResponse> {
    let industry = Industry::resolve(Some(&industry));
    Json(PaletteResponse {
        industry: industry.key().to_string(),
        palette: industry.palette(),
        guidelines: industry
            .guidelines()
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    })
}

/// GET /api/styles/{style}/recommendations - Color usage guidance.
async fn style_recommendations(Path(style): Path<String>) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        style: Style::resolve(Some(&style)).key().to_string(),
        recommendations: color_usage_recommendations(&style),
    })
}

/// POST /api/layouts/metrics - Score a layout.
async fn layout_metrics(Json(body): Json<LayoutMetricsRequest>) -> Json<LayoutMetricsResponse> {
    let metrics = calculate_optimization_metrics(&body.layout, &body.request);
    Json(LayoutMetricsResponse {
        overall: metrics.overall(),
        recommendations: layout_recommendations(&body.layout, &body.request),
        metrics,
    })
}

/// POST /api/content/complexity - Score content complexity.
async fn content_complexity(Json(content): Json<Map<String, Value>>) -> Json<ComplexityResponse> {
    Json(ComplexityResponse {
        complexity: calculate_content_complexity(&content),
        max: MAX_CONTENT_COMPLEXITY,
    })
}

/// GET /api/fallback/layouts/{page_type} - Default layout.
async fn fallback_layout(Path(page_type): Path<String>) -> Json<Layout> {
    Json(generate_fallback_layout(&page_type))
}

/// GET /api/fallback/seo/{industry} - Default SEO metadata.
async fn fallback_seo(
    Path(industry): Path<String>,
    Query(query): Query<SeoQuery>,
) -> Json<SeoSuggestions> {
    Json(industry_seo_fallback(
        Some(&industry),
        query.business_name.as_deref(),
    ))
}

/// POST /api/ai/palette - AI color scheme.
async fn ai_palette(
    State(state): State<AppState>,
    Json(request): Json<ColorRequest>,
) -> Json<Suggestion<ColorScheme>> {
    Json(state.designer.suggest_palette(&request).await)
}

/// POST /api/ai/layout - AI layout.
async fn ai_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Json<Suggestion<LayoutSuggestion>> {
    Json(state.designer.optimize_layout(&request).await)
}

/// POST /api/ai/seo - AI SEO metadata.
async fn ai_seo(
    State(state): State<AppState>,
    Json(request): Json<SeoRequest>,
) -> Json<Suggestion<SeoSuggestions>> {
    Json(state.designer.suggest_seo(&request).await)
}

/// POST /api/ai/content - AI section copy.
async fn ai_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Json<Suggestion<ContentSuggestions>> {
    Json(state.designer.suggest_content(&request).await)
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The API is stateless and read-only, so any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Color endpoints
        .route("/api/colors/hex", post(color_from_hsl))
        .route("/api/colors/{hex}/hsl", get(color_to_hsl))
        .route("/api/colors/{hex}/derived", get(derived_colors))
        .route("/api/colors/{hex}/harmonies", get(color_harmonies))
        // Palette endpoints
        .route("/api/palettes/{industry}", get(industry_palette))
        .route(
            "/api/styles/{style}/recommendations",
            get(style_recommendations),
        )
        // Scoring endpoints
        .route("/api/layouts/metrics", post(layout_metrics))
        .route("/api/content/complexity", post(content_complexity))
        // Fallback endpoints
        .route("/api/fallback/layouts/{page_type}", get(fallback_layout))
        .route("/api/fallback/seo/{industry}", get(fallback_seo))
        // AI endpoints
        .route("/api/ai/palette", post(ai_palette))
        .route("/api/ai/layout", post(ai_layout))
        .route("/api/ai/seo", post(ai_seo))
        .route("/api/ai/content", post(ai_content))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Starting designkit web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_accepts_encoded_hash() {
        assert!(parse_hex("#3b82f6").is_ok());
        assert!(parse_hex("3B82F6").is_ok());
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        let (status, Json(error)) = parse_hex("blue").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Invalid color");
        assert!(error.details.is_some());
    }
}
