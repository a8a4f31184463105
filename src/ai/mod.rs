//! AI-assisted design suggestions.
//!
//! The [`AiDesigner`] wraps a [`CompletionClient`] and always returns a usable
//! answer: model output when it parses and validates, the deterministic
//! fallbacks otherwise.

pub mod client;
pub mod designer;
pub mod parse;
pub mod prompts;

pub use client::{
    ChatMessage, CompletionClient, CompletionError, CompletionRequest, HttpCompletionClient,
    OfflineClient, Role,
};
pub use designer::{
    resolve_color_scheme, resolve_content, resolve_layout, resolve_seo, AiDesigner,
    GenerationError, RawColorScheme, RawPalette,
};
pub use parse::{extract_json, parse_structured, ParseError};
