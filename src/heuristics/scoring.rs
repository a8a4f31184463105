//! Rule-based layout and content scoring.
//!
//! Each score starts at a fixed base and accumulates bounded bonuses. The
//! thresholds below are the whole model; there is nothing statistical here.

use serde_json::{Map, Value};

use crate::models::{Layout, LayoutRequest, OptimizationMetrics};

const CONVERSION_BASE: u32 = 50;
const CTA_BONUS: u32 = 20;
const OPENING_BONUS: u32 = 15;
const SOCIAL_PROOF_BONUS: u32 = 15;

const ENGAGEMENT_BASE: u32 = 60;
const POINTS_PER_INTERACTION: u32 = 5;
const INTERACTION_CAP: u32 = 20;
const POINTS_PER_SECTION_KIND: u32 = 3;
const VARIETY_CAP: u32 = 20;

const ACCESSIBILITY_BASE: u32 = 70;
const HIERARCHY_BONUS: u32 = 15;
const USER_FLOW_BONUS: u32 = 15;

const PERFORMANCE_BASE: u32 = 80;
const MAX_GRID_COLUMNS: u32 = 12;
const GRID_BONUS: u32 = 10;
const MAX_LEAN_SECTIONS: usize = 8;
const LEAN_SECTIONS_BONUS: u32 = 10;

/// Upper bound of [`calculate_content_complexity`].
pub const MAX_CONTENT_COMPLEXITY: u8 = 10;

fn saturating_points(count: usize, per_item: u32, cap: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_item)
        .min(cap)
}

fn has_cta(layout: &Layout) -> bool {
    layout.sections.iter().any(|section| {
        section.kind.as_str().contains("cta")
            || section
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains("cta"))
    })
}

fn has_grid_within_limit(layout: &Layout) -> bool {
    layout
        .grid_system
        .is_some_and(|grid| grid.columns <= MAX_GRID_COLUMNS)
}

/// Scores a proposed layout on four axes.
///
/// - conversion: 50, +20 CTA, +15 hero/value proposition, +15 testimonials/reviews
/// - engagement: 60, +5 per interaction (max 20), +3 per distinct section type (max 20)
/// - accessibility: 70, +15 content hierarchy given, +15 user flow given
/// - performance: 80, +10 declared grid of at most 12 columns, +10 at most 8 sections
///
/// Every score is clamped to 100.
#[must_use]
pub fn calculate_optimization_metrics(
    layout: &Layout,
    request: &LayoutRequest,
) -> OptimizationMetrics {
    let mut conversion = CONVERSION_BASE;
    if has_cta(layout) {
        conversion += CTA_BONUS;
    }
    if layout.has_kind(|k| k.is_opening()) {
        conversion += OPENING_BONUS;
    }
    if layout.has_kind(|k| k.is_social_proof()) {
        conversion += SOCIAL_PROOF_BONUS;
    }

    let engagement = ENGAGEMENT_BASE
        + saturating_points(
            layout.total_interactions(),
            POINTS_PER_INTERACTION,
            INTERACTION_CAP,
        )
        + saturating_points(
            layout.distinct_kinds().len(),
            POINTS_PER_SECTION_KIND,
            VARIETY_CAP,
        );

    let mut accessibility = ACCESSIBILITY_BASE;
    if !request.content_hierarchy.is_empty() {
        accessibility += HIERARCHY_BONUS;
    }
    if !request.user_flow.is_empty() {
        accessibility += USER_FLOW_BONUS;
    }

    let mut performance = PERFORMANCE_BASE;
    if has_grid_within_limit(layout) {
        performance += GRID_BONUS;
    }
    if layout.section_count() <= MAX_LEAN_SECTIONS {
        performance += LEAN_SECTIONS_BONUS;
    }

    OptimizationMetrics::from_points(conversion, engagement, accessibility, performance)
}

/// Lists one improvement for every bonus the layout did not earn.
#[must_use]
pub fn layout_recommendations(layout: &Layout, request: &LayoutRequest) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !has_cta(layout) {
        recommendations.push("Add a clear call-to-action section".to_string());
    }
    if !layout.has_kind(|k| k.is_opening()) {
        recommendations
            .push("Open with a hero or value proposition section".to_string());
    }
    if !layout.has_kind(|k| k.is_social_proof()) {
        recommendations.push("Add testimonials or reviews as social proof".to_string());
    }
    if layout.total_interactions() * (POINTS_PER_INTERACTION as usize) < INTERACTION_CAP as usize
    {
        recommendations
            .push("Add interactive elements such as buttons, forms or carousels".to_string());
    }
    if request.content_hierarchy.is_empty() {
        recommendations.push("Define a content hierarchy for screen readers".to_string());
    }
    if request.user_flow.is_empty() {
        recommendations.push("Describe the intended user flow".to_string());
    }
    if !has_grid_within_limit(layout) {
        recommendations.push(format!(
            "Use a grid of at most {MAX_GRID_COLUMNS} columns"
        ));
    }
    if layout.section_count() > MAX_LEAN_SECTIONS {
        recommendations.push(format!(
            "Reduce the page to {MAX_LEAN_SECTIONS} sections or fewer"
        ));
    }

    recommendations
}

/// Estimates how heavy a content payload is, on a 0-10 scale.
///
/// Per top-level field: strings add `min(len / 100, 3)`, arrays add
/// `len * 0.5`, objects add `keys * 0.3`. Numbers, booleans and nulls add
/// nothing. The sum is rounded and clamped to 10.
///
/// String length is measured in UTF-16 code units, as a browser reports it,
/// so characters outside the Basic Multilingual Plane (most emoji) count twice.
///
/// ```
/// use designkit::heuristics::calculate_content_complexity;
/// use serde_json::json;
///
/// let content = json!({ "title": "Welcome" });
/// assert_eq!(calculate_content_complexity(content.as_object().unwrap()), 0);
/// ```
#[must_use]
pub fn calculate_content_complexity(content: &Map<String, Value>) -> u8 {
    let score: f64 = content
        .values()
        .map(|value| match value {
            Value::String(text) => (text.encode_utf16().count() as f64 / 100.0).min(3.0),
            Value::Array(items) => items.len() as f64 * 0.5,
            Value::Object(fields) => fields.len() as f64 * 0.3,
            Value::Null | Value::Bool(_) | Value::Number(_) => 0.0,
        })
        .sum();

    score.round().min(f64::from(MAX_CONTENT_COMPLEXITY)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridSystem, LayoutSection, SectionKind};
    use serde_json::json;

    fn section(kind: SectionKind) -> LayoutSection {
        LayoutSection::new(kind.as_str().to_string(), kind)
    }

    fn scores(m: OptimizationMetrics) -> (u8, u8, u8, u8) {
        (
            m.conversion_potential(),
            m.engagement_score(),
            m.accessibility_score(),
            m.performance_score(),
        )
    }

    #[test]
    fn test_bare_layout_scores() {
        let layout: Layout = serde_json::from_value(json!({ "sections": [] })).unwrap();
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(scores(metrics), (50, 60, 70, 90));
    }

    #[test]
    fn test_empty_layout_with_grid_scores() {
        let layout = Layout {
            grid_system: Some(GridSystem::default()),
            ..Layout::default()
        };
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(scores(metrics), (50, 60, 70, 100));
    }

    #[test]
    fn test_conversion_bonuses() {
        let layout = Layout {
            sections: vec![
                section(SectionKind::Hero),
                section(SectionKind::Cta),
                section(SectionKind::Reviews),
            ],
            ..Layout::default()
        };
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(metrics.conversion_potential(), 100);
    }

    #[test]
    fn test_cta_detected_from_title_or_custom_tag() {
        let mut titled = section(SectionKind::Features);
        titled.title = Some("Final CTA".to_string());
        let layout = Layout {
            sections: vec![titled],
            ..Layout::default()
        };
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(metrics.conversion_potential(), 70);

        let layout = Layout {
            sections: vec![section(SectionKind::from("cta_banner"))],
            ..Layout::default()
        };
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(metrics.conversion_potential(), 70);
    }

    #[test]
    fn test_engagement_caps() {
        let mut busy = section(SectionKind::Hero);
        busy.interactions = vec!["click".to_string(); 10];
        let mut sections = vec![busy];
        for tag in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            sections.push(section(SectionKind::from(tag)));
        }
        let layout = Layout {
            sections,
            ..Layout::default()
        };
        // 10 interactions -> capped at 20; 9 kinds -> 27 capped at 20
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(metrics.engagement_score(), 100);
        // 9 sections exceeds the lean limit, no grid declared
        assert_eq!(metrics.performance_score(), 80);
    }

    #[test]
    fn test_engagement_partial() {
        let mut hero = section(SectionKind::Hero);
        hero.interactions = vec!["click".to_string(), "scroll".to_string()];
        let layout = Layout {
            sections: vec![hero, section(SectionKind::Faq)],
            ..Layout::default()
        };
        // 60 + 10 + 6
        let metrics = calculate_optimization_metrics(&layout, &LayoutRequest::default());
        assert_eq!(metrics.engagement_score(), 76);
    }

    #[test]
    fn test_accessibility_and_wide_grid() {
        let request = LayoutRequest {
            content_hierarchy: vec!["hero".to_string()],
            user_flow: vec!["land".to_string(), "convert".to_string()],
            ..LayoutRequest::default()
        };
        let layout = Layout {
            grid_system: Some(GridSystem {
                columns: 16,
                ..GridSystem::default()
            }),
            ..Layout::default()
        };
        let metrics = calculate_optimization_metrics(&layout, &request);
        assert_eq!(metrics.accessibility_score(), 100);
        assert_eq!(metrics.performance_score(), 90);
    }

    #[test]
    fn test_every_score_is_clamped() {
        let mut sections: Vec<LayoutSection> = (0..30)
            .map(|i| {
                let mut s = section(SectionKind::from(format!("kind_{i}")));
                s.interactions = vec!["click".to_string(); 5];
                s
            })
            .collect();
        sections.push(section(SectionKind::Cta));
        sections.push(section(SectionKind::Hero));
        sections.push(section(SectionKind::Testimonials));
        let layout = Layout {
            sections,
            grid_system: Some(GridSystem::default()),
            ..Layout::default()
        };
        let request = LayoutRequest {
            content_hierarchy: vec!["a".to_string()],
            user_flow: vec!["b".to_string()],
            ..LayoutRequest::default()
        };
        let (c, e, a, p) = scores(calculate_optimization_metrics(&layout, &request));
        for score in [c, e, a, p] {
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_recommendations_track_missing_bonuses() {
        let layout = Layout::default();
        let recommendations = layout_recommendations(&layout, &LayoutRequest::default());
        assert!(recommendations.iter().any(|r| r.contains("call-to-action")));
        assert!(recommendations.iter().any(|r| r.contains("social proof")));
        assert!(recommendations.iter().any(|r| r.contains("grid")));
        assert!(!recommendations.iter().any(|r| r.contains("sections or fewer")));
    }

    #[test]
    fn test_content_complexity_examples() {
        let welcome = json!({ "title": "Welcome" });
        assert_eq!(calculate_content_complexity(welcome.as_object().unwrap()), 0);

        let rich = json!({
            "body": "x".repeat(250),          // 2.5
            "items": [1, 2, 3],               // 1.5
            "meta": { "a": 1, "b": 2 },       // 0.6
            "published": true                 // 0
        });
        // 4.6 rounds to 5
        assert_eq!(calculate_content_complexity(rich.as_object().unwrap()), 5);
    }

    #[test]
    fn test_content_complexity_string_cap_and_total_clamp() {
        let long = json!({ "body": "x".repeat(10_000) });
        assert_eq!(calculate_content_complexity(long.as_object().unwrap()), 3);

        let huge = json!({ "items": vec![0; 100] });
        assert_eq!(
            calculate_content_complexity(huge.as_object().unwrap()),
            MAX_CONTENT_COMPLEXITY
        );

        assert_eq!(calculate_content_complexity(&Map::new()), 0);
    }

    #[test]
    fn test_content_complexity_counts_utf16_units() {
        // 75 emoji are 150 UTF-16 units: 1.5 rounds to 2
        let emoji = json!({ "body": "\u{1f680}".repeat(75) });
        assert_eq!(calculate_content_complexity(emoji.as_object().unwrap()), 2);

        let accented = json!({ "body": "é".repeat(75) });
        assert_eq!(calculate_content_complexity(accented.as_object().unwrap()), 1);
    }
}
