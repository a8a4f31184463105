//! Caller-supplied requests for the design heuristics and the AI designer.
//!
//! Every field is optional on the wire; missing values resolve to the
//! documented defaults when the request is consumed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Industry, SectionKind, Style};

/// Page type used when a request does not name one.
pub const DEFAULT_PAGE_TYPE: &str = "homepage";

fn default_page_type() -> String {
    DEFAULT_PAGE_TYPE.to_string()
}

/// Request for a color scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorRequest {
    /// Base color as a hex string; validated when consumed.
    pub base_color: Option<String>,
    /// Style key (vibrant, minimal, corporate, modern, earthy, pastel).
    pub style: Option<String>,
    /// Industry key.
    pub industry: Option<String>,
    /// Free-text mood ("calm", "playful", ...), forwarded to the prompt only.
    pub mood: Option<String>,
    /// Brand name, forwarded to the prompt only.
    pub brand_name: Option<String>,
}

impl ColorRequest {
    /// Resolved industry profile.
    #[must_use]
    pub fn industry(&self) -> Industry {
        Industry::resolve(self.industry.as_deref())
    }

    /// Resolved style profile.
    #[must_use]
    pub fn style(&self) -> Style {
        Style::resolve(self.style.as_deref())
    }
}

/// Request for a page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutRequest {
    /// Page type (homepage, about, services, ...).
    pub page_type: String,
    /// Industry key.
    pub industry: Option<String>,
    /// Business goals ("generate leads", "sell tickets", ...).
    pub goals: Vec<String>,
    /// Content blocks in order of importance.
    pub content_hierarchy: Vec<String>,
    /// Steps a visitor is expected to take.
    pub user_flow: Vec<String>,
    /// Who the page is for.
    pub target_audience: Option<String>,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            page_type: default_page_type(),
            industry: None,
            goals: Vec::new(),
            content_hierarchy: Vec::new(),
            user_flow: Vec::new(),
            target_audience: None,
        }
    }
}

impl LayoutRequest {
    /// Request for a page type with every other field defaulted.
    #[must_use]
    pub fn for_page(page_type: impl Into<String>) -> Self {
        Self {
            page_type: page_type.into(),
            ..Self::default()
        }
    }

    /// Resolved industry profile.
    #[must_use]
    pub fn industry(&self) -> Industry {
        Industry::resolve(self.industry.as_deref())
    }
}

/// Request for SEO metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoRequest {
    /// Industry key.
    pub industry: Option<String>,
    /// Business name, substituted into titles.
    pub business_name: Option<String>,
    /// Page type the metadata is for.
    pub page_type: Option<String>,
    /// City or region for local SEO.
    pub location: Option<String>,
    /// Keywords the caller already targets.
    pub keywords: Vec<String>,
    /// Existing page copy.
    pub content: Option<String>,
}

impl SeoRequest {
    /// Resolved industry profile.
    #[must_use]
    pub fn industry(&self) -> Industry {
        Industry::resolve(self.industry.as_deref())
    }
}

/// Request for section copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRequest {
    /// Industry key.
    pub industry: Option<String>,
    /// Section the copy is for.
    pub section: SectionKind,
    /// Business name.
    pub business_name: Option<String>,
    /// Desired tone ("friendly", "professional", ...).
    pub tone: Option<String>,
    /// Points the copy must mention.
    pub key_points: Vec<String>,
    /// Existing content payload, scored for complexity.
    pub content: Map<String, Value>,
}

impl Default for ContentRequest {
    fn default() -> Self {
        Self {
            industry: None,
            section: SectionKind::Hero,
            business_name: None,
            tone: None,
            key_points: Vec::new(),
            content: Map::new(),
        }
    }
}

impl ContentRequest {
    /// Resolved industry profile.
    #[must_use]
    pub fn industry(&self) -> Industry {
        Industry::resolve(self.industry.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layout_request_defaults() {
        let request: LayoutRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.page_type, "homepage");
        assert!(request.content_hierarchy.is_empty());
        assert_eq!(request.industry(), Industry::Technology);
    }

    #[test]
    fn test_layout_request_camel_case_fields() {
        let request: LayoutRequest = serde_json::from_value(json!({
            "pageType": "about",
            "contentHierarchy": ["story", "team"],
            "userFlow": ["read", "contact"]
        }))
        .unwrap();
        assert_eq!(request.page_type, "about");
        assert_eq!(request.content_hierarchy.len(), 2);
        assert_eq!(request.user_flow.len(), 2);
    }

    #[test]
    fn test_color_request_resolves_profiles() {
        let request = ColorRequest {
            style: Some("EARTHY".to_string()),
            industry: Some("nope".to_string()),
            ..ColorRequest::default()
        };
        assert_eq!(request.style(), Style::Earthy);
        assert_eq!(request.industry(), Industry::Technology);
    }

    #[test]
    fn test_content_request_section_tag() {
        let request: ContentRequest =
            serde_json::from_value(json!({ "section": "pricing" })).unwrap();
        assert_eq!(request.section, SectionKind::Pricing);
    }
}
