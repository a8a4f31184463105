//! Page layout data structures.
//!
//! A [`Layout`] is an ordered list of [`LayoutSection`]s plus the grid and
//! breakpoint settings the page builder renders them with. Section types are
//! a closed set ([`SectionKind`]) so the scorer can match on them exhaustively;
//! tags the builder does not know are kept verbatim in [`SectionKind::Other`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Type tag of a layout section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    /// Large opening banner.
    Hero,
    /// Short statement of what the business offers.
    ValueProposition,
    /// Call-to-action block.
    Cta,
    /// Customer quotes.
    Testimonials,
    /// Ratings and reviews.
    Reviews,
    /// Feature grid.
    Features,
    /// Pricing table.
    Pricing,
    /// Image gallery.
    Gallery,
    /// About / story block.
    About,
    /// Contact form or details.
    Contact,
    /// Frequently asked questions.
    Faq,
    /// Team members.
    Team,
    /// Service listing.
    Services,
    /// Portfolio / case studies.
    Portfolio,
    /// Blog post listing.
    Blog,
    /// Top navigation bar.
    Navigation,
    /// Page footer.
    Footer,
    /// Any tag not covered above, stored normalized.
    Other(String),
}

impl SectionKind {
    /// Canonical snake_case tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hero => "hero",
            Self::ValueProposition => "value_proposition",
            Self::Cta => "cta",
            Self::Testimonials => "testimonials",
            Self::Reviews => "reviews",
            Self::Features => "features",
            Self::Pricing => "pricing",
            Self::Gallery => "gallery",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Faq => "faq",
            Self::Team => "team",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Navigation => "navigation",
            Self::Footer => "footer",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this section earns the "opening statement" conversion bonus.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        matches!(self, Self::Hero | Self::ValueProposition)
    }

    /// Whether this section provides social proof.
    #[must_use]
    pub const fn is_social_proof(&self) -> bool {
        matches!(self, Self::Testimonials | Self::Reviews)
    }
}

impl From<&str> for SectionKind {
    fn from(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "hero" => Self::Hero,
            "value_proposition" => Self::ValueProposition,
            "cta" => Self::Cta,
            "testimonials" => Self::Testimonials,
            "reviews" => Self::Reviews,
            "features" => Self::Features,
            "pricing" => Self::Pricing,
            "gallery" => Self::Gallery,
            "about" => Self::About,
            "contact" => Self::Contact,
            "faq" => Self::Faq,
            "team" => Self::Team,
            "services" => Self::Services,
            "portfolio" => Self::Portfolio,
            "blog" => Self::Blog,
            "navigation" | "nav" | "header" => Self::Navigation,
            "footer" => Self::Footer,
            _ => Self::Other(normalized),
        }
    }
}

impl From<String> for SectionKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering priority of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be above the fold.
    High,
    /// Default.
    #[default]
    Medium,
    /// May be collapsed on small screens.
    Low,
}

/// Section placement, all values in percent of the page (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PositionRepr")]
pub struct SectionPosition {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

#[derive(Deserialize)]
struct PositionRepr {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default = "full_extent")]
    width: f64,
    #[serde(default)]
    height: f64,
}

fn full_extent() -> f64 {
    100.0
}

impl From<PositionRepr> for SectionPosition {
    fn from(repr: PositionRepr) -> Self {
        Self::new(repr.x, repr.y, repr.width, repr.height)
    }
}

impl SectionPosition {
    /// Creates a position, clamping every coordinate into `[0,100]`.
    ///
    /// Non-finite values collapse to 0.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let pct = |v: f64| if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 };
        Self {
            x: pct(x),
            y: pct(y),
            width: pct(width),
            height: pct(height),
        }
    }
}

impl Default for SectionPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 0.0)
    }
}

/// A named, positioned region of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSection {
    /// Identifier, unique within the layout.
    #[serde(default)]
    pub id: String,
    /// Section type.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Optional heading shown to the builder user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Placement on the page.
    #[serde(default)]
    pub position: SectionPosition,
    /// Free-form content payload.
    #[serde(default)]
    pub content: Map<String, Value>,
    /// Free-form style payload.
    #[serde(default)]
    pub style: Map<String, Value>,
    /// Rendering priority.
    #[serde(default)]
    pub priority: Priority,
    /// Interactive elements in the section (buttons, forms, carousels, ...).
    #[serde(default)]
    pub interactions: Vec<String>,
}

impl LayoutSection {
    /// Creates an empty section of the given kind.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            title: None,
            position: SectionPosition::default(),
            content: Map::new(),
            style: Map::new(),
            priority: Priority::default(),
            interactions: Vec::new(),
        }
    }
}

/// Column grid the sections snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSystem {
    /// Number of columns.
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Gutter between columns in pixels.
    #[serde(default = "default_gap")]
    pub gap: u32,
    /// Maximum content width in pixels.
    #[serde(default = "default_max_width")]
    pub max_width: u32,
}

fn default_columns() -> u32 {
    12
}

fn default_gap() -> u32 {
    24
}

fn default_max_width() -> u32 {
    1200
}

impl Default for GridSystem {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            gap: default_gap(),
            max_width: default_max_width(),
        }
    }
}

/// Responsive breakpoints in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Small phones and up.
    pub mobile: u32,
    /// Tablets and up.
    pub tablet: u32,
    /// Laptops and up.
    pub desktop: u32,
    /// Large monitors.
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 640,
            tablet: 768,
            desktop: 1024,
            wide: 1280,
        }
    }
}

/// An ordered page layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Sections in render order.
    #[serde(default)]
    pub sections: Vec<LayoutSection>,
    /// Column grid, if the layout declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_system: Option<GridSystem>,
    /// Responsive breakpoints.
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

impl Layout {
    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Distinct section kinds present in the layout.
    #[must_use]
    pub fn distinct_kinds(&self) -> HashSet<&SectionKind> {
        self.sections.iter().map(|s| &s.kind).collect()
    }

    /// Interaction count summed over every section.
    #[must_use]
    pub fn total_interactions(&self) -> usize {
        self.sections.iter().map(|s| s.interactions.len()).sum()
    }

    /// True if any section has the given kind.
    #[must_use]
    pub fn has_kind(&self, predicate: impl Fn(&SectionKind) -> bool) -> bool {
        self.sections.iter().any(|s| predicate(&s.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_kind_parsing() {
        assert_eq!(SectionKind::from("Hero"), SectionKind::Hero);
        assert_eq!(SectionKind::from("value-proposition"), SectionKind::ValueProposition);
        assert_eq!(SectionKind::from("header"), SectionKind::Navigation);
        assert_eq!(
            SectionKind::from("CTA Banner"),
            SectionKind::Other("cta_banner".to_string())
        );
    }

    #[test]
    fn test_section_kind_roundtrips_through_serde() {
        let kind: SectionKind = serde_json::from_value(json!("testimonials")).unwrap();
        assert_eq!(kind, SectionKind::Testimonials);
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("testimonials"));

        let other: SectionKind = serde_json::from_value(json!("newsletter")).unwrap();
        assert_eq!(serde_json::to_value(&other).unwrap(), json!("newsletter"));
    }

    #[test]
    fn test_bare_layout_has_no_grid() {
        let layout: Layout = serde_json::from_value(json!({ "sections": [] })).unwrap();
        assert!(layout.sections.is_empty());
        assert!(layout.grid_system.is_none());
        assert_eq!(layout.breakpoints, Breakpoints::default());
    }

    #[test]
    fn test_section_defaults_and_clamping() {
        let layout: Layout = serde_json::from_value(json!({
            "sections": [
                { "type": "hero", "position": { "x": -5, "y": 10, "width": 250, "height": 40 } },
                { "type": "cta", "interactions": ["click", "hover"] }
            ],
            "gridSystem": { "columns": 16 }
        }))
        .unwrap();

        let hero = &layout.sections[0];
        assert_eq!(hero.position, SectionPosition::new(0.0, 10.0, 100.0, 40.0));
        assert_eq!(hero.priority, Priority::Medium);

        assert_eq!(layout.total_interactions(), 2);
        assert_eq!(layout.grid_system.unwrap().columns, 16);
        assert_eq!(layout.grid_system.unwrap().gap, 24);
    }

    #[test]
    fn test_distinct_kinds() {
        let layout = Layout {
            sections: vec![
                LayoutSection::new("a", SectionKind::Features),
                LayoutSection::new("b", SectionKind::Features),
                LayoutSection::new("c", SectionKind::Faq),
            ],
            ..Layout::default()
        };
        assert_eq!(layout.distinct_kinds().len(), 2);
        assert!(layout.has_kind(|k| *k == SectionKind::Faq));
    }
}
