//! Palette and style recommendation commands.

use crate::cli::common::{parse_color, print_json, CliError, CliResult};
use crate::heuristics::{color_usage_recommendations, fallback_color_scheme};
use crate::models::{ColorRequest, Industry, Style};
use clap::Args;

/// Build a palette from a brand color, style or industry
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Brand color to build the palette around (hex)
    #[arg(short, long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Style (vibrant, minimal, corporate, modern, earthy, pastel)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Industry (technology, healthcare, finance, ...)
    #[arg(short, long)]
    pub industry: Option<String>,

    /// List known industries and styles instead
    #[arg(long)]
    pub list: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        if self.list {
            return self.list_profiles();
        }

        // Unknown names fall back silently in the library; the CLI is strict.
        if let Some(primary) = &self.primary {
            parse_color(primary)?;
        }
        if let Some(style) = &self.style {
            Style::from_key(style)
                .ok_or_else(|| CliError::validation(format!("Unknown style: {style}")))?;
        }
        if let Some(industry) = &self.industry {
            Industry::from_key(industry)
                .ok_or_else(|| CliError::validation(format!("Unknown industry: {industry}")))?;
        }

        let scheme = fallback_color_scheme(&ColorRequest {
            base_color: self.primary.clone(),
            style: self.style.clone(),
            industry: self.industry.clone(),
            ..ColorRequest::default()
        });

        if self.json {
            return print_json(&scheme);
        }

        println!("{}", scheme.rationale);
        println!();
        for (role, color) in scheme.palette.roles() {
            println!("  {:<11} {}", role.key(), color);
        }
        println!();
        println!(
            "Text contrast: {:.2}:1 ({})",
            scheme.palette.text_contrast(),
            if scheme.wcag_aa { "WCAG AA" } else { "below WCAG AA" }
        );
        Ok(())
    }

    fn list_profiles(&self) -> CliResult<()> {
        let industries: Vec<&str> = Industry::ALL.iter().map(|i| i.key()).collect();
        let styles: Vec<&str> = Style::ALL.iter().map(|s| s.key()).collect();

        if self.json {
            return print_json(&serde_json::json!({
                "industries": industries,
                "styles": styles,
            }));
        }

        println!("Industries: {}", industries.join(", "));
        println!("Styles:     {}", styles.join(", "));
        Ok(())
    }
}

/// Show color usage recommendations for a style
#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    /// Style name; unknown styles get the "modern" guidance
    #[arg(value_name = "STYLE", default_value = "modern")]
    pub style: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RecommendArgs {
    /// Execute the recommend command
    pub fn execute(&self) -> CliResult<()> {
        let recommendations = color_usage_recommendations(&self.style);

        if self.json {
            print_json(&recommendations)?;
        } else {
            for recommendation in &recommendations {
                println!("- {recommendation}");
            }
        }
        Ok(())
    }
}
