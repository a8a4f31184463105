//! Layout scoring and content complexity commands.

use std::path::PathBuf;

use crate::cli::common::{print_json, read_json, CliResult};
use crate::heuristics::{
    calculate_content_complexity, calculate_optimization_metrics, layout_recommendations,
    MAX_CONTENT_COMPLEXITY,
};
use crate::models::{Layout, LayoutRequest, OptimizationMetrics};
use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};

/// Score a layout JSON file
#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    /// Layout JSON file ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub layout: PathBuf,

    /// Layout request JSON file (content hierarchy, user flow, ...)
    #[arg(short, long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreResult {
    metrics: OptimizationMetrics,
    overall: u8,
    recommendations: Vec<String>,
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> CliResult<()> {
        let layout: Layout = read_json(&self.layout)?;
        let request: LayoutRequest = match &self.request {
            Some(path) => read_json(path)?,
            None => LayoutRequest::default(),
        };

        let metrics = calculate_optimization_metrics(&layout, &request);
        let result = ScoreResult {
            overall: metrics.overall(),
            recommendations: layout_recommendations(&layout, &request),
            metrics,
        };

        if self.json {
            return print_json(&result);
        }

        println!("Conversion potential: {:>3}", metrics.conversion_potential());
        println!("Engagement:           {:>3}", metrics.engagement_score());
        println!("Accessibility:        {:>3}", metrics.accessibility_score());
        println!("Performance:          {:>3}", metrics.performance_score());
        println!("Overall:              {:>3}", result.overall);
        if !result.recommendations.is_empty() {
            println!();
            println!("Recommendations:");
            for recommendation in &result.recommendations {
                println!("  - {recommendation}");
            }
        }
        Ok(())
    }
}

/// Score the complexity of a content JSON object
#[derive(Debug, Clone, Args)]
pub struct ComplexityArgs {
    /// Content JSON object file ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub content: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ComplexityArgs {
    /// Execute the complexity command
    pub fn execute(&self) -> CliResult<()> {
        let content: Map<String, Value> = read_json(&self.content)?;
        let complexity = calculate_content_complexity(&content);

        if self.json {
            print_json(&serde_json::json!({
                "complexity": complexity,
                "max": MAX_CONTENT_COMPLEXITY,
            }))?;
        } else {
            println!("Complexity: {complexity}/{MAX_CONTENT_COMPLEXITY}");
        }
        Ok(())
    }
}
