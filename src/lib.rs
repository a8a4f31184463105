//! designkit library
//!
//! Deterministic design heuristics for website builders (color conversion and
//! harmonies, industry palettes, layout scoring, content complexity, fallback
//! layouts and SEO metadata), plus an AI designer that asks an upstream model
//! for suggestions and falls back to the heuristics whenever it cannot.

// Module declarations
pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod heuristics;
pub mod models;
#[cfg(feature = "web")]
pub mod web;
