//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use designkit::ai::{AiDesigner, CompletionClient, CompletionError, CompletionRequest};

/// Completion client that returns a canned reply and counts calls.
pub struct StubClient {
    reply: Result<String, CompletionError>,
    calls: AtomicUsize,
}

impl StubClient {
    /// Always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Always fails with `error`.
    pub fn failing(error: CompletionError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        assert!(!request.messages.is_empty(), "prompt must not be empty");
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Designer wired to a stub that answers with `reply`.
pub fn designer_replying(reply: &str) -> (AiDesigner, Arc<StubClient>) {
    let stub = StubClient::replying(reply);
    (AiDesigner::new(stub.clone()), stub)
}

/// A layout with every conversion bonus, six distinct section types and
/// four interactions.
pub fn landing_layout_json() -> Value {
    json!({
        "sections": [
            {"id": "hero", "type": "hero", "title": "Welcome", "interactions": ["button"]},
            {"id": "features", "type": "features", "interactions": ["hover"]},
            {"id": "reviews", "type": "testimonials", "interactions": ["carousel"]},
            {"id": "pricing", "type": "pricing"},
            {"id": "signup", "type": "cta", "interactions": ["form"]},
            {"id": "footer", "type": "footer"}
        ],
        "gridSystem": {"columns": 12, "gap": 24, "maxWidth": 1200}
    })
}

/// Writes `value` as JSON into `dir/name` and returns the path.
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
