//! AI-assisted suggestion commands.
//!
//! Without an API key every command prints the fallback result and marks it
//! as such; the exit code is 0 either way.

use std::future::Future;

use crate::ai::AiDesigner;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::fallback::{print_content, print_layout, print_seo};
use crate::config::Config;
use crate::models::{
    ColorRequest, ContentRequest, LayoutRequest, SectionKind, SeoRequest, Suggestion,
};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Ask the model for design suggestions (falls back to defaults offline)
#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[command(subcommand)]
    command: SuggestCommand,
}

#[derive(Subcommand, Debug)]
enum SuggestCommand {
    /// Suggest a color scheme
    Palette(SuggestPaletteArgs),
    /// Suggest and score a layout
    Layout(SuggestLayoutArgs),
    /// Suggest SEO metadata
    Seo(SuggestSeoArgs),
    /// Suggest section copy
    Content(SuggestContentArgs),
}

/// Suggest a color scheme
#[derive(Args, Debug)]
pub struct SuggestPaletteArgs {
    /// Brand color (hex)
    #[arg(short, long, value_name = "HEX")]
    primary: Option<String>,

    /// Style key
    #[arg(short, long)]
    style: Option<String>,

    /// Industry key
    #[arg(short, long)]
    industry: Option<String>,

    /// Desired mood ("calm", "playful", ...)
    #[arg(short, long)]
    mood: Option<String>,

    /// Brand name
    #[arg(short, long)]
    brand_name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Suggest and score a layout
#[derive(Args, Debug)]
pub struct SuggestLayoutArgs {
    /// Page type
    #[arg(value_name = "PAGE_TYPE", default_value = "homepage")]
    page_type: String,

    /// Industry key
    #[arg(short, long)]
    industry: Option<String>,

    /// Business goal (repeatable)
    #[arg(short, long = "goal")]
    goals: Vec<String>,

    /// Content block in order of importance (repeatable)
    #[arg(long = "hierarchy")]
    content_hierarchy: Vec<String>,

    /// Expected visitor step (repeatable)
    #[arg(long = "flow")]
    user_flow: Vec<String>,

    /// Target audience
    #[arg(short, long)]
    audience: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Suggest SEO metadata
#[derive(Args, Debug)]
pub struct SuggestSeoArgs {
    /// Industry key
    #[arg(short, long)]
    industry: Option<String>,

    /// Business name
    #[arg(short, long)]
    business_name: Option<String>,

    /// Page type
    #[arg(short, long)]
    page_type: Option<String>,

    /// City or region
    #[arg(short, long)]
    location: Option<String>,

    /// Existing keyword (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Suggest section copy
#[derive(Args, Debug)]
pub struct SuggestContentArgs {
    /// Section type
    #[arg(short, long, default_value = "hero")]
    section: String,

    /// Industry key
    #[arg(short, long)]
    industry: Option<String>,

    /// Business name
    #[arg(short, long)]
    business_name: Option<String>,

    /// Tone ("friendly", "professional", ...)
    #[arg(short, long)]
    tone: Option<String>,

    /// Point the copy must mention (repeatable)
    #[arg(short, long = "point")]
    key_points: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl SuggestArgs {
    /// Execute suggest subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let designer = AiDesigner::from_config(&config);

        match &self.command {
            SuggestCommand::Palette(args) => args.execute(&designer),
            SuggestCommand::Layout(args) => args.execute(&designer),
            SuggestCommand::Seo(args) => args.execute(&designer),
            SuggestCommand::Content(args) => args.execute(&designer),
        }
    }
}

fn block_on<F: Future>(future: F) -> CliResult<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;
    Ok(runtime.block_on(future))
}

fn print_header<T>(suggestion: &Suggestion<T>) {
    if suggestion.is_fallback() {
        println!("(offline suggestion: model unavailable or response unusable)");
        println!();
    }
}

fn emit<T: Serialize>(
    suggestion: &Suggestion<T>,
    json: bool,
    human: impl FnOnce(&T),
) -> CliResult<()> {
    if json {
        return print_json(suggestion);
    }
    print_header(suggestion);
    human(&suggestion.data);
    Ok(())
}

impl SuggestPaletteArgs {
    /// Execute palette suggestion
    pub fn execute(&self, designer: &AiDesigner) -> CliResult<()> {
        let request = ColorRequest {
            base_color: self.primary.clone(),
            style: self.style.clone(),
            industry: self.industry.clone(),
            mood: self.mood.clone(),
            brand_name: self.brand_name.clone(),
        };
        let suggestion = block_on(designer.suggest_palette(&request))?;

        emit(&suggestion, self.json, |scheme| {
            println!("{}", scheme.rationale);
            println!();
            for (role, color) in scheme.palette.roles() {
                println!("  {:<11} {}", role.key(), color);
            }
            println!();
            for recommendation in &scheme.recommendations {
                println!("- {recommendation}");
            }
        })
    }
}

impl SuggestLayoutArgs {
    /// Execute layout suggestion
    pub fn execute(&self, designer: &AiDesigner) -> CliResult<()> {
        let request = LayoutRequest {
            page_type: self.page_type.clone(),
            industry: self.industry.clone(),
            goals: self.goals.clone(),
            content_hierarchy: self.content_hierarchy.clone(),
            user_flow: self.user_flow.clone(),
            target_audience: self.audience.clone(),
        };
        let suggestion = block_on(designer.optimize_layout(&request))?;

        emit(&suggestion, self.json, |data| {
            print_layout(&self.page_type, &data.layout);
            println!();
            println!(
                "Scores: conversion {} | engagement {} | accessibility {} | performance {}",
                data.metrics.conversion_potential(),
                data.metrics.engagement_score(),
                data.metrics.accessibility_score(),
                data.metrics.performance_score()
            );
            for recommendation in &data.recommendations {
                println!("  - {recommendation}");
            }
        })
    }
}

impl SuggestSeoArgs {
    /// Execute SEO suggestion
    pub fn execute(&self, designer: &AiDesigner) -> CliResult<()> {
        let request = SeoRequest {
            industry: self.industry.clone(),
            business_name: self.business_name.clone(),
            page_type: self.page_type.clone(),
            location: self.location.clone(),
            keywords: self.keywords.clone(),
            content: None,
        };
        let suggestion = block_on(designer.suggest_seo(&request))?;
        emit(&suggestion, self.json, print_seo)
    }
}

impl SuggestContentArgs {
    /// Execute content suggestion
    pub fn execute(&self, designer: &AiDesigner) -> CliResult<()> {
        let request = ContentRequest {
            industry: self.industry.clone(),
            section: SectionKind::from(self.section.as_str()),
            business_name: self.business_name.clone(),
            tone: self.tone.clone(),
            key_points: self.key_points.clone(),
            ..ContentRequest::default()
        };
        let suggestion = block_on(designer.suggest_content(&request))?;
        emit(&suggestion, self.json, print_content)
    }
}
