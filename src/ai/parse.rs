//! Extraction of structured data from free-text model replies.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::{DeserializeOwned, IgnoredAny};
use thiserror::Error;

static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```").expect("fence regex is valid")
});

/// A model reply that could not be turned into the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The reply had no text at all.
    #[error("empty response")]
    Empty,
    /// No JSON object or array was found.
    #[error("no JSON found in response")]
    NoJson,
    /// JSON was found but neither parser accepted it for the target type.
    #[error("invalid JSON: {strict}; lenient parse: {lenient}")]
    Invalid {
        /// Error from the strict parser.
        strict: String,
        /// Error from the JSON5 parser.
        lenient: String,
    },
}

/// Pulls the JSON payload out of a reply.
///
/// Tries, in order: the first fenced code block whose body is JSON, the first
/// `{`/`[` span (up to the last matching closer) that parses, and finally the
/// trimmed text itself. When no span parses, the first span is returned so the
/// caller still sees the parse error.
#[must_use]
pub fn extract_json(response: &str) -> &str {
    let mut fenced = FENCE_REGEX
        .captures_iter(response)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|body| body.starts_with(['{', '[']));
    let first_fenced = fenced.next();
    if let Some(body) = first_fenced
        .into_iter()
        .chain(fenced)
        .find(|body| is_json(body))
        .or(first_fenced)
    {
        return body;
    }

    let trimmed = response.trim();
    let mut spans = trimmed.match_indices(['{', '[']).filter_map(|(start, opener)| {
        let closer = if opener == "{" { '}' } else { ']' };
        trimmed
            .rfind(closer)
            .filter(|end| *end > start)
            .map(|end| &trimmed[start..=end])
    });
    let first_span = spans.next();

    first_span
        .into_iter()
        .chain(spans)
        .find(|span| is_json(span))
        .or(first_span)
        .unwrap_or(trimmed)
}

fn is_json(candidate: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(candidate).is_ok()
        || json5::from_str::<serde_json::Value>(candidate).is_ok()
}

/// Parses a model reply into `T`.
///
/// The extracted payload goes through `serde_json` first and `json5` second,
/// so trailing commas, comments and single quotes are tolerated.
pub fn parse_structured<T: DeserializeOwned>(response: &str) -> Result<T, ParseError> {
    if response.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let payload = extract_json(response);
    if !payload.starts_with(['{', '[']) {
        return Err(ParseError::NoJson);
    }

    match serde_json::from_str(payload) {
        Ok(value) => Ok(value),
        Err(strict) => json5::from_str(payload).map_err(|lenient| ParseError::Invalid {
            strict: strict.to_string(),
            lenient: lenient.to_string(),
        }),
    }
}
