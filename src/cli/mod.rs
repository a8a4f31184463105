//! CLI command handlers for designkit.
//!
//! This module provides headless, scriptable access to the design heuristics
//! and the AI designer for automation, testing, and CI/CD integration.

pub mod color;
pub mod common;
pub mod config;
pub mod fallback;
pub mod palette;
pub mod score;
pub mod suggest;

// Re-export types used by main.rs and tests
pub use color::{ContrastArgs, ConvertArgs, DeriveArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use fallback::FallbackArgs;
pub use palette::{PaletteArgs, RecommendArgs};
pub use score::{ComplexityArgs, ScoreArgs};
pub use suggest::SuggestArgs;
