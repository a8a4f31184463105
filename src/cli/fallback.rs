//! Offline default layouts, SEO metadata and section copy.

use crate::cli::common::{print_json, CliResult};
use crate::heuristics::{
    fallback_content_suggestions, generate_fallback_layout, industry_seo_fallback,
};
use crate::models::{ContentSuggestions, Industry, Layout, SectionKind, SeoSuggestions};
use clap::{Args, Subcommand};

/// Print deterministic defaults without contacting a model
#[derive(Args, Debug)]
pub struct FallbackArgs {
    #[command(subcommand)]
    command: FallbackCommand,
}

#[derive(Subcommand, Debug)]
enum FallbackCommand {
    /// Default layout for a page type
    Layout(FallbackLayoutArgs),
    /// Default SEO metadata for an industry
    Seo(FallbackSeoArgs),
    /// Default copy for a section
    Content(FallbackContentArgs),
}

/// Default layout for a page type
#[derive(Args, Debug)]
pub struct FallbackLayoutArgs {
    /// Page type (homepage, about, services, portfolio, contact, landing, blog, pricing)
    #[arg(value_name = "PAGE_TYPE", default_value = "homepage")]
    page_type: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Default SEO metadata for an industry
#[derive(Args, Debug)]
pub struct FallbackSeoArgs {
    /// Industry key
    #[arg(short, long)]
    industry: Option<String>,

    /// Business name used in titles and headings
    #[arg(short, long)]
    business_name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Default copy for a section
#[derive(Args, Debug)]
pub struct FallbackContentArgs {
    /// Section type (hero, cta, testimonials, about, pricing, contact, faq, ...)
    #[arg(short, long, default_value = "hero")]
    section: String,

    /// Industry key
    #[arg(short, long)]
    industry: Option<String>,

    /// Business name
    #[arg(short, long)]
    business_name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl FallbackArgs {
    /// Execute fallback subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            FallbackCommand::Layout(args) => args.execute(),
            FallbackCommand::Seo(args) => args.execute(),
            FallbackCommand::Content(args) => args.execute(),
        }
    }
}

impl FallbackLayoutArgs {
    /// Execute layout command
    pub fn execute(&self) -> CliResult<()> {
        let layout = generate_fallback_layout(&self.page_type);
        if self.json {
            print_json(&layout)
        } else {
            print_layout(&self.page_type, &layout);
            Ok(())
        }
    }
}

impl FallbackSeoArgs {
    /// Execute seo command
    pub fn execute(&self) -> CliResult<()> {
        let seo = industry_seo_fallback(self.industry.as_deref(), self.business_name.as_deref());
        if self.json {
            print_json(&seo)
        } else {
            print_seo(&seo);
            Ok(())
        }
    }
}

impl FallbackContentArgs {
    /// Execute content command
    pub fn execute(&self) -> CliResult<()> {
        let content = fallback_content_suggestions(
            Industry::resolve(self.industry.as_deref()),
            &SectionKind::from(self.section.as_str()),
            self.business_name.as_deref(),
        );
        if self.json {
            print_json(&content)
        } else {
            print_content(&content);
            Ok(())
        }
    }
}

pub(crate) fn print_layout(page_type: &str, layout: &Layout) {
    println!("Layout: {page_type} ({} sections)", layout.section_count());
    for section in &layout.sections {
        println!(
            "  {:>5.1}% {:<18} {:<24} {:?}",
            section.position.y,
            section.kind.as_str(),
            section.title.as_deref().unwrap_or(""),
            section.priority
        );
    }
}

pub(crate) fn print_seo(seo: &SeoSuggestions) {
    println!("Title:       {}", seo.title);
    println!("Description: {}", seo.meta_description);
    println!("H1:          {}", seo.h1);
    if !seo.h2.is_empty() {
        println!("H2:          {}", seo.h2.join(" | "));
    }
    println!("Keywords:    {}", seo.keywords.join(", "));
}

pub(crate) fn print_content(content: &ContentSuggestions) {
    println!("{}", content.headline);
    if !content.subheadline.is_empty() {
        println!("{}", content.subheadline);
    }
    for paragraph in &content.paragraphs {
        println!();
        println!("{paragraph}");
    }
    println!();
    println!("[{}]", content.call_to_action);
}
