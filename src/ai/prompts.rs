//! Prompt text for each designer operation.

use std::fmt::Write;

use crate::heuristics::calculate_content_complexity;
use crate::models::{ColorRequest, ContentRequest, LayoutRequest, SeoRequest};

/// System prompt shared by every operation.
pub const SYSTEM_PROMPT: &str = "You are a senior web designer and conversion specialist. \
Answer with a single JSON object and nothing else. Use lowercase #rrggbb hex colors.";

fn push_list(prompt: &mut String, label: &str, items: &[String]) {
    if !items.is_empty() {
        let _ = writeln!(prompt, "{label}: {}", items.join(", "));
    }
}

fn push_opt(prompt: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        let _ = writeln!(prompt, "{label}: {value}");
    }
}

/// Palette prompt.
#[must_use]
pub fn palette_prompt(request: &ColorRequest) -> String {
    let industry = request.industry();
    let mut prompt = format!(
        "Design a website color palette for the {} industry in a {} style.\n",
        industry.label(),
        request.style().key()
    );
    push_opt(&mut prompt, "Brand color", request.base_color.as_deref());
    push_opt(&mut prompt, "Brand name", request.brand_name.as_deref());
    push_opt(&mut prompt, "Mood", request.mood.as_deref());
    let _ = writeln!(prompt, "Industry guidelines: {}", industry.guidelines().join("; "));
    prompt.push_str(
        "Return {\"palette\": {\"primary\", \"secondary\", \"accent\", \"neutral\", \
         \"background\", \"text\"}, \"rationale\": string, \"recommendations\": [string]}. \
         Text on background must reach a 4.5:1 contrast ratio.",
    );
    prompt
}

/// Layout prompt.
#[must_use]
pub fn layout_prompt(request: &LayoutRequest) -> String {
    let mut prompt = format!(
        "Propose the section layout of a {} page for a {} business.\n",
        request.page_type,
        request.industry().label()
    );
    push_list(&mut prompt, "Goals", &request.goals);
    push_list(&mut prompt, "Content hierarchy", &request.content_hierarchy);
    push_list(&mut prompt, "User flow", &request.user_flow);
    push_opt(&mut prompt, "Target audience", request.target_audience.as_deref());
    prompt.push_str(
        "Return {\"sections\": [{\"id\", \"type\", \"title\", \"position\": {\"x\", \"y\", \
         \"width\", \"height\"} in percent, \"priority\": \"high\"|\"medium\"|\"low\", \
         \"interactions\": [string]}], \"gridSystem\": {\"columns\", \"gap\", \"maxWidth\"}}. \
         Keep it to at most 8 sections, include a call to action and social proof.",
    );
    prompt
}

/// SEO prompt.
#[must_use]
pub fn seo_prompt(request: &SeoRequest) -> String {
    let mut prompt = format!(
        "Write SEO metadata for a {} website.\n",
        request.industry().label()
    );
    push_opt(&mut prompt, "Business name", request.business_name.as_deref());
    push_opt(&mut prompt, "Page type", request.page_type.as_deref());
    push_opt(&mut prompt, "Location", request.location.as_deref());
    push_list(&mut prompt, "Existing keywords", &request.keywords);
    push_opt(&mut prompt, "Page content", request.content.as_deref());
    prompt.push_str(
        "Return {\"title\" (max 60 chars), \"metaDescription\" (max 160 chars), \
         \"keywords\": [string], \"h1\", \"h2\": [string], \"ogTitle\", \"ogDescription\"}.",
    );
    prompt
}

/// Section copy prompt.
#[must_use]
pub fn content_prompt(request: &ContentRequest) -> String {
    let mut prompt = format!(
        "Write copy for the {} section of a {} website.\n",
        request.section,
        request.industry().label()
    );
    push_opt(&mut prompt, "Business name", request.business_name.as_deref());
    push_opt(&mut prompt, "Tone", request.tone.as_deref());
    push_list(&mut prompt, "Must mention", &request.key_points);
    if !request.content.is_empty() {
        let _ = writeln!(
            prompt,
            "Existing content complexity: {}/10. Keep the new copy at a similar density.",
            calculate_content_complexity(&request.content)
        );
    }
    prompt.push_str(
        "Return {\"headline\", \"subheadline\", \"callToAction\", \"paragraphs\": [string], \
         \"tone\"}.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_prompt_mentions_inputs() {
        let prompt = palette_prompt(&ColorRequest {
            base_color: Some("#3b82f6".to_string()),
            industry: Some("finance".to_string()),
            mood: Some("calm".to_string()),
            ..ColorRequest::default()
        });
        assert!(prompt.contains("Finance"));
        assert!(prompt.contains("#3b82f6"));
        assert!(prompt.contains("Mood: calm"));
        assert!(!prompt.contains("Brand name"));
    }

    #[test]
    fn test_layout_prompt_lists_goals() {
        let mut request = LayoutRequest::for_page("pricing");
        request.goals = vec!["sell plans".to_string(), "reduce churn".to_string()];
        let prompt = layout_prompt(&request);
        assert!(prompt.contains("pricing page"));
        assert!(prompt.contains("Goals: sell plans, reduce churn"));
        assert!(!prompt.contains("User flow"));
    }
}
