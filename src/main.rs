//! designkit - design heuristics from the command line
//!
//! Converts and derives colors, builds palettes, scores layouts and asks the
//! AI designer for suggestions, falling back to deterministic defaults when no
//! model is reachable.

use clap::{Parser, Subcommand};
use designkit::cli::{
    ComplexityArgs, ConfigArgs, ContrastArgs, ConvertArgs, DeriveArgs, ExitCode, FallbackArgs,
    PaletteArgs, RecommendArgs, ScoreArgs, SuggestArgs,
};
use designkit::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// designkit - colors, palettes, layout scores and AI design suggestions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert between hex and HSL
    Convert(ConvertArgs),
    /// Derive complementary, triadic and analogous colors
    Derive(DeriveArgs),
    /// Check the contrast ratio between two colors
    Contrast(ContrastArgs),
    /// Build a palette from a brand color, style or industry
    Palette(PaletteArgs),
    /// Show color usage recommendations for a style
    Recommend(RecommendArgs),
    /// Score a layout
    Score(ScoreArgs),
    /// Score content complexity
    Complexity(ComplexityArgs),
    /// Print offline default layouts, SEO metadata and copy
    Fallback(FallbackArgs),
    /// Ask the AI designer for suggestions
    Suggest(SuggestArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Derive(args) => args.execute(),
        Commands::Contrast(args) => args.execute(),
        Commands::Palette(args) => args.execute(),
        Commands::Recommend(args) => args.execute(),
        Commands::Score(args) => args.execute(),
        Commands::Complexity(args) => args.execute(),
        Commands::Fallback(args) => args.execute(),
        Commands::Suggest(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
            e.exit_code().into()
        }
    }
}
