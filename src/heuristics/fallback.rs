//! Deterministic default responses.
//!
//! These producers back every AI operation: whenever the upstream model fails
//! or answers with something that does not parse, the designer substitutes the
//! matching fallback here. Each one is a pure function of its inputs, with one
//! exception: [`industry_seo_fallback`] picks one of several literal title
//! templates at random. Every variant is a valid, non-empty title.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Map, Value};

use super::palette::{
    color_usage_recommendations, derive_complementary_colors, palette_from_primary,
};
use super::scoring::{calculate_optimization_metrics, layout_recommendations};
use crate::models::{
    Breakpoints, Color, ColorRequest, ColorScheme, ContentSuggestions, GridSystem, Industry,
    Layout, LayoutRequest, LayoutSection, LayoutSuggestion, Priority, SectionKind,
    SectionPosition, SeoSuggestions, Style,
};

/// Page types with a dedicated fallback template.
pub const FALLBACK_PAGE_TYPES: [&str; 8] = [
    "homepage",
    "about",
    "services",
    "portfolio",
    "contact",
    "landing",
    "blog",
    "pricing",
];

/// One row of a page template: kind, heading, relative height, priority, interactions.
type SectionTemplate = (
    SectionKind,
    &'static str,
    f64,
    Priority,
    &'static [&'static str],
);

fn row(
    kind: SectionKind,
    heading: &'static str,
    weight: f64,
    priority: Priority,
    interactions: &'static [&'static str],
) -> SectionTemplate {
    (kind, heading, weight, priority, interactions)
}

fn page_template(page_type: &str) -> Vec<SectionTemplate> {
    use Priority::{High, Low, Medium};
    use SectionKind as K;

    let nav = || row(K::Navigation, "Navigation", 5.0, High, &["menu"]);
    let footer = || row(K::Footer, "Footer", 8.0, Low, &["links"]);

    match normalize_page_type(page_type) {
        "about" => vec![
            nav(),
            row(K::Hero, "Our Story", 20.0, High, &[]),
            row(K::About, "Who We Are", 20.0, High, &[]),
            row(K::Team, "Meet the Team", 17.0, Medium, &["hover"]),
            row(K::Testimonials, "What Clients Say", 15.0, Medium, &["carousel"]),
            row(K::Cta, "Work With Us", 15.0, High, &["button"]),
            footer(),
        ],
        "services" => vec![
            nav(),
            row(K::Hero, "Our Services", 20.0, High, &["button"]),
            row(K::Services, "What We Offer", 25.0, High, &["hover"]),
            row(K::Pricing, "Packages", 17.0, Medium, &["toggle", "button"]),
            row(K::Faq, "Questions", 12.0, Low, &["accordion"]),
            row(K::Cta, "Book a Consultation", 13.0, High, &["button"]),
            footer(),
        ],
        "portfolio" => vec![
            nav(),
            row(K::Hero, "Selected Work", 20.0, High, &[]),
            row(K::Portfolio, "Projects", 35.0, High, &["filter", "lightbox"]),
            row(K::Testimonials, "Client Feedback", 15.0, Medium, &["carousel"]),
            row(K::Contact, "Start a Project", 17.0, High, &["form"]),
            footer(),
        ],
        "contact" => vec![
            nav(),
            row(K::Hero, "Get in Touch", 20.0, High, &[]),
            row(K::Contact, "Send Us a Message", 40.0, High, &["form", "map"]),
            row(K::Faq, "Before You Write", 27.0, Medium, &["accordion"]),
            footer(),
        ],
        "landing" => vec![
            row(K::Hero, "Headline Offer", 25.0, High, &["button"]),
            row(K::ValueProposition, "Why It Matters", 15.0, High, &[]),
            row(K::Features, "How It Works", 20.0, Medium, &["hover"]),
            row(K::Testimonials, "Results", 15.0, Medium, &["carousel"]),
            row(K::Pricing, "Choose Your Plan", 15.0, Medium, &["button"]),
            row(K::Cta, "Get Started Today", 10.0, High, &["button", "form"]),
        ],
        "blog" => vec![
            nav(),
            row(K::Hero, "Journal", 17.0, High, &["search"]),
            row(K::Blog, "Latest Posts", 50.0, High, &["pagination"]),
            row(K::Cta, "Subscribe", 20.0, Medium, &["form"]),
            footer(),
        ],
        "pricing" => vec![
            nav(),
            row(K::Hero, "Simple Pricing", 15.0, High, &[]),
            row(K::Pricing, "Plans", 30.0, High, &["toggle", "button"]),
            row(K::Faq, "Pricing Questions", 15.0, Medium, &["accordion"]),
            row(K::Testimonials, "Trusted By", 12.0, Low, &["carousel"]),
            row(K::Cta, "Start Free Trial", 15.0, High, &["button"]),
            footer(),
        ],
        _ => vec![
            nav(),
            row(K::Hero, "Welcome", 22.0, High, &["button"]),
            row(K::ValueProposition, "Why Choose Us", 12.0, High, &[]),
            row(K::Features, "Features", 18.0, Medium, &["hover"]),
            row(K::Testimonials, "Testimonials", 15.0, Medium, &["carousel"]),
            row(K::Cta, "Get Started", 12.0, High, &["button"]),
            footer(),
        ],
    }
}

fn normalize_page_type(page_type: &str) -> &'static str {
    let normalized = page_type.trim().to_lowercase();
    match normalized.as_str() {
        "" | "home" | "index" | "homepage" => "homepage",
        "landing" | "landing_page" | "landing-page" => "landing",
        other => FALLBACK_PAGE_TYPES
            .into_iter()
            .find(|known| *known == other)
            .unwrap_or("homepage"),
    }
}

fn section_style(kind: &SectionKind) -> Map<String, Value> {
    let (background, padding) = match kind {
        SectionKind::Hero => ("primary", "xl"),
        SectionKind::Cta => ("accent", "lg"),
        SectionKind::Navigation | SectionKind::Footer => ("neutral", "sm"),
        SectionKind::Testimonials | SectionKind::Reviews => ("secondary", "lg"),
        _ => ("background", "md"),
    };
    let mut style = Map::new();
    style.insert("background".to_string(), json!(background));
    style.insert("padding".to_string(), json!(padding));
    style
}

/// Builds the default layout for a page type.
///
/// Sections are stacked full-width top to bottom; heights sum to 100%.
/// Unknown page types get the homepage template. Calling this repeatedly
/// with the same input returns identical layouts.
#[must_use]
pub fn generate_fallback_layout(page_type: &str) -> Layout {
    let template = page_template(page_type);
    let total: f64 = template.iter().map(|row| row.2).sum();

    let mut y = 0.0;
    let sections = template
        .into_iter()
        .enumerate()
        .map(|(index, (kind, heading, weight, priority, interactions))| {
            let height = weight / total * 100.0;
            let mut section = LayoutSection::new(format!("{}-{}", kind.as_str(), index + 1), kind);
            section.title = Some(heading.to_string());
            section.position = SectionPosition::new(0.0, y, 100.0, height);
            section.content.insert("heading".to_string(), json!(heading));
            section.style = section_style(&section.kind);
            section.priority = priority;
            section.interactions = interactions.iter().map(|s| (*s).to_string()).collect();
            y += height;
            section
        })
        .collect();

    Layout {
        sections,
        grid_system: Some(GridSystem::default()),
        breakpoints: Breakpoints::default(),
    }
}

/// Fallback layout plus its locally computed scores.
#[must_use]
pub fn fallback_layout_suggestion(request: &LayoutRequest) -> LayoutSuggestion {
    let layout = generate_fallback_layout(&request.page_type);
    let metrics = calculate_optimization_metrics(&layout, request);
    let recommendations = layout_recommendations(&layout, request);
    LayoutSuggestion {
        layout,
        metrics,
        recommendations,
    }
}

/// Builds a color scheme without the model.
///
/// Resolution order: a valid base color, then a recognized style, then the
/// industry default (technology when unknown). An invalid base color is
/// ignored rather than reported.
#[must_use]
pub fn fallback_color_scheme(request: &ColorRequest) -> ColorScheme {
    let base = request
        .base_color
        .as_deref()
        .and_then(|hex| Color::from_hex(hex).ok());
    let named_style = request.style.as_deref().and_then(Style::from_key);
    let industry = request.industry();

    let (palette, rationale) = match (base, named_style) {
        (Some(primary), _) => (
            palette_from_primary(primary),
            format!(
                "Built around {primary} with its complementary and triadic harmonies"
            ),
        ),
        (None, Some(style)) => (
            style.palette(),
            format!("Reference {style} palette"),
        ),
        (None, None) => (
            industry.palette(),
            format!("Default palette for the {} industry", industry.label()),
        ),
    };

    ColorScheme {
        derived: derive_complementary_colors(palette.primary).to_vec(),
        recommendations: color_usage_recommendations(request.style().key()),
        wcag_aa: palette.meets_wcag_aa(),
        palette,
        rationale,
    }
}

struct SeoProfile {
    tagline: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
}

const fn seo_profile(industry: Industry) -> SeoProfile {
    match industry {
        Industry::Technology => SeoProfile {
            tagline: "Software That Scales",
            description: "Modern technology solutions that help teams build, ship and grow faster.",
            keywords: &["technology", "software", "saas", "digital solutions", "innovation"],
        },
        Industry::Healthcare => SeoProfile {
            tagline: "Care You Can Trust",
            description: "Compassionate, professional healthcare with easy online booking and experienced practitioners.",
            keywords: &["healthcare", "clinic", "medical care", "doctor", "wellness"],
        },
        Industry::Finance => SeoProfile {
            tagline: "Secure Financial Guidance",
            description: "Trusted financial advice and services to protect and grow what matters to you.",
            keywords: &["finance", "financial planning", "investment", "advisory", "banking"],
        },
        Industry::Education => SeoProfile {
            tagline: "Learn Without Limits",
            description: "Courses and programs designed to help every learner reach their goals.",
            keywords: &["education", "courses", "learning", "training", "tutoring"],
        },
        Industry::Retail => SeoProfile {
            tagline: "Shop the Latest Collection",
            description: "Discover quality products, fast shipping and easy returns.",
            keywords: &["shop", "online store", "retail", "products", "deals"],
        },
        Industry::Restaurant => SeoProfile {
            tagline: "Fresh Food, Warm Welcome",
            description: "Seasonal menus, friendly service and easy reservations.",
            keywords: &["restaurant", "menu", "dining", "reservations", "local food"],
        },
        Industry::RealEstate => SeoProfile {
            tagline: "Find Your Next Home",
            description: "Browse listings, book viewings and work with agents who know the market.",
            keywords: &["real estate", "homes for sale", "property", "listings", "realtor"],
        },
        Industry::Creative => SeoProfile {
            tagline: "Design That Stands Out",
            description: "Creative studio crafting brands, campaigns and digital experiences.",
            keywords: &["creative agency", "design", "branding", "portfolio", "studio"],
        },
        Industry::Legal => SeoProfile {
            tagline: "Experienced Legal Counsel",
            description: "Clear, dependable legal advice. Book a confidential consultation today.",
            keywords: &["law firm", "lawyer", "legal advice", "attorney", "consultation"],
        },
        Industry::Fitness => SeoProfile {
            tagline: "Train Stronger Every Day",
            description: "Classes, coaching and programs for every fitness level.",
            keywords: &["fitness", "gym", "personal training", "classes", "workout"],
        },
        Industry::Photography => SeoProfile {
            tagline: "Moments Worth Keeping",
            description: "Event, portrait and commercial photography with online galleries and prints.",
            keywords: &["photography", "photographer", "event photos", "portraits", "prints"],
        },
    }
}

const SEO_TITLE_TEMPLATES: [&str; 3] = [
    "{name} | {tagline}",
    "{tagline} | {name}",
    "{name} - {label} Services",
];

/// SEO metadata for an industry without the model.
///
/// The title is one of a few literal templates picked at random; all other
/// fields are fixed per industry.
#[must_use]
pub fn industry_seo_fallback(industry: Option<&str>, business_name: Option<&str>) -> SeoSuggestions {
    industry_seo_fallback_with_rng(industry, business_name, &mut rand::thread_rng())
}

/// [`industry_seo_fallback`] with a caller-supplied random source.
#[must_use]
pub fn industry_seo_fallback_with_rng<R: Rng + ?Sized>(
    industry: Option<&str>,
    business_name: Option<&str>,
    rng: &mut R,
) -> SeoSuggestions {
    let industry = Industry::resolve(industry);
    let profile = seo_profile(industry);
    let name = business_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| industry.label());

    let template = SEO_TITLE_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(SEO_TITLE_TEMPLATES[0]);
    let title = template
        .replace("{name}", name)
        .replace("{tagline}", profile.tagline)
        .replace("{label}", industry.label());

    SeoSuggestions {
        og_title: title.clone(),
        og_description: profile.description.to_string(),
        title,
        meta_description: profile.description.to_string(),
        keywords: profile.keywords.iter().map(|k| (*k).to_string()).collect(),
        h1: format!("{name}: {}", profile.tagline),
        h2: vec![
            format!("Why Choose {name}"),
            format!("Our {} Services", industry.label()),
            "Get in Touch".to_string(),
        ],
    }
}

/// Section copy without the model.
#[must_use]
pub fn fallback_content_suggestions(
    industry: Industry,
    section: &SectionKind,
    business_name: Option<&str>,
) -> ContentSuggestions {
    let name = business_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Our team");
    let tagline = seo_profile(industry).tagline;
    let label = industry.label().to_lowercase();

    let (headline, subheadline, call_to_action, paragraphs) = match section {
        SectionKind::Hero | SectionKind::ValueProposition => (
            tagline.to_string(),
            format!("{name} delivers {label} services built around you."),
            "Get Started",
            vec![seo_profile(industry).description.to_string()],
        ),
        SectionKind::Cta => (
            "Ready to Begin?".to_string(),
            "It only takes a minute to get started.".to_string(),
            "Contact Us",
            Vec::new(),
        ),
        SectionKind::Testimonials | SectionKind::Reviews => (
            "What Our Clients Say".to_string(),
            format!("Real feedback from people who chose {name}."),
            "Read More Stories",
            Vec::new(),
        ),
        SectionKind::About | SectionKind::Team => (
            format!("About {name}"),
            format!("Experienced {label} professionals who care about the details."),
            "Meet the Team",
            vec![format!(
                "{name} combines deep {label} experience with a personal approach to every project."
            )],
        ),
        SectionKind::Pricing => (
            "Simple, Transparent Pricing".to_string(),
            "Choose the plan that fits your needs.".to_string(),
            "See Plans",
            Vec::new(),
        ),
        SectionKind::Contact => (
            "Get in Touch".to_string(),
            "We usually reply within one business day.".to_string(),
            "Send Message",
            Vec::new(),
        ),
        SectionKind::Faq => (
            "Frequently Asked Questions".to_string(),
            "Everything you need to know before getting started.".to_string(),
            "Ask a Question",
            Vec::new(),
        ),
        _ => (
            tagline.to_string(),
            format!("Discover what {name} can do for you."),
            "Learn More",
            Vec::new(),
        ),
    };

    ContentSuggestions {
        headline,
        subheadline,
        call_to_action: call_to_action.to_string(),
        paragraphs,
        tone: "professional".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn kinds(layout: &Layout) -> Vec<SectionKind> {
        layout.sections.iter().map(|s| s.kind.clone()).collect()
    }

    #[test]
    fn test_homepage_fallback_is_idempotent() {
        let first = generate_fallback_layout("homepage");
        let second = generate_fallback_layout("homepage");
        assert_eq!(first, second);
        assert_eq!(first.section_count(), 7);
        assert_eq!(first.grid_system.unwrap().columns, 12);
        assert_eq!(first.sections[1].kind, SectionKind::Hero);
    }

    #[test]
    fn test_unknown_page_type_uses_homepage() {
        assert_eq!(
            kinds(&generate_fallback_layout("spaceship")),
            kinds(&generate_fallback_layout("homepage"))
        );
        assert_eq!(
            kinds(&generate_fallback_layout("Home")),
            kinds(&generate_fallback_layout("homepage"))
        );
    }

    #[test]
    fn test_every_template_stacks_to_full_height() {
        for page_type in FALLBACK_PAGE_TYPES {
            let layout = generate_fallback_layout(page_type);
            assert!(!layout.sections.is_empty(), "{page_type} has no sections");
            let last = layout.sections.last().unwrap();
            let bottom = last.position.y + last.position.height;
            assert!((bottom - 100.0).abs() < 1e-6, "{page_type} ends at {bottom}");
            assert!(layout.section_count() <= 8);
        }
    }

    #[test]
    fn test_fallback_layouts_score_well() {
        let request = LayoutRequest::for_page("landing");
        let suggestion = fallback_layout_suggestion(&request);
        assert_eq!(suggestion.metrics.conversion_potential(), 100);
        assert_eq!(suggestion.metrics.performance_score(), 100);
    }

    #[test]
    fn test_color_scheme_from_base_color() {
        let scheme = fallback_color_scheme(&ColorRequest {
            base_color: Some("#3B82F6".to_string()),
            ..ColorRequest::default()
        });
        assert_eq!(scheme.palette.primary.to_hex(), "#3b82f6");
        assert_eq!(scheme.derived.len(), 4);
        assert!(scheme.wcag_aa);
    }

    #[test]
    fn test_color_scheme_invalid_base_falls_through() {
        let scheme = fallback_color_scheme(&ColorRequest {
            base_color: Some("not-a-color".to_string()),
            style: Some("earthy".to_string()),
            ..ColorRequest::default()
        });
        assert_eq!(scheme.palette, Style::Earthy.palette());

        let scheme = fallback_color_scheme(&ColorRequest {
            industry: Some("underwater-basket-weaving".to_string()),
            ..ColorRequest::default()
        });
        assert_eq!(scheme.palette, Industry::Technology.palette());
        assert_eq!(scheme.recommendations, color_usage_recommendations("modern"));
    }

    #[test]
    fn test_seo_fallback_title_is_one_of_the_templates() {
        let mut rng = StdRng::seed_from_u64(7);
        let expected = [
            "Acme Clinic | Care You Can Trust",
            "Care You Can Trust | Acme Clinic",
            "Acme Clinic - Healthcare Services",
        ];
        for _ in 0..20 {
            let seo =
                industry_seo_fallback_with_rng(Some("healthcare"), Some("Acme Clinic"), &mut rng);
            assert!(expected.contains(&seo.title.as_str()), "{}", seo.title);
            assert!(!seo.meta_description.is_empty());
            assert_eq!(seo.keywords[0], "healthcare");
        }
    }

    #[test]
    fn test_seo_fallback_unknown_industry() {
        let seo = industry_seo_fallback(Some("underwater-basket-weaving"), None);
        assert!(seo.title.contains("Technology") || seo.title.contains("Software"));
        assert!(!seo.h1.is_empty());
        assert_eq!(seo.h2.len(), 3);
    }

    #[test]
    fn test_content_fallback_per_section() {
        let hero = fallback_content_suggestions(Industry::Fitness, &SectionKind::Hero, Some("Iron Gym"));
        assert_eq!(hero.headline, "Train Stronger Every Day");
        assert!(hero.subheadline.contains("Iron Gym"));
        assert!(!hero.call_to_action.is_empty());

        let other = fallback_content_suggestions(
            Industry::Legal,
            &SectionKind::Other("newsletter".to_string()),
            None,
        );
        assert_eq!(other.call_to_action, "Learn More");
    }
}
