//! End-to-end tests for the `designkit` command line.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

mod fixtures;
use fixtures::{landing_layout_json, write_json};

/// Path to the designkit binary
fn designkit_bin() -> String {
    std::env::var("CARGO_BIN_EXE_designkit").unwrap_or_else(|_| "target/debug/designkit".to_string())
}

/// Runs designkit with an isolated config directory and no API key.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(designkit_bin())
        .env("DESIGNKIT_CONFIG_DIR", config_dir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn run_json(args: &[&str], config_dir: &Path) -> Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "{args:?} failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Color Commands
// ============================================================================

#[test]
fn test_convert_hex_to_hsl() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["convert", "#ff0000", "--json"], dir.path());

    assert_eq!(result["hex"], "#ff0000");
    assert_eq!(result["hsl"]["h"], 0.0);
    assert_eq!(result["hsl"]["s"], 1.0);
    assert_eq!(result["hsl"]["l"], 0.5);
}

#[test]
fn test_convert_hsl_to_hex() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["convert", "--hsl", "120", "1", "0.5", "--json"], dir.path());
    assert_eq!(result["hex"], "#00ff00");
}

#[test]
fn test_convert_invalid_hex_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let output = run(&["convert", "not-a-color"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn test_derive_order() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["derive", "#3b82f6", "--json"], dir.path());
    assert_eq!(result, json!(["#f6af3b", "#e34e86", "#86e34e", "#513bf6"]));
}

#[test]
fn test_derive_all_includes_second_analogous() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["derive", "3b82f6", "--all", "--json"], dir.path());
    assert_eq!(result["analogous"][1], "#3bdff6");
}

#[test]
fn test_contrast_black_on_white() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["contrast", "#000000", "#ffffff", "--json"], dir.path());

    assert_eq!(result["ratio"], 21.0);
    assert_eq!(result["aaNormal"], true);
    assert_eq!(result["aaaNormal"], true);
}

// ============================================================================
// Palette Commands
// ============================================================================

#[test]
fn test_palette_unknown_industry_rejected() {
    let dir = TempDir::new().unwrap();
    let output = run(&["palette", "--industry", "underwater-basket-weaving"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_palette_default_is_technology() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["palette", "--json"], dir.path());

    assert_eq!(result["palette"]["primary"], "#3b82f6");
    assert_eq!(result["derived"].as_array().unwrap().len(), 4);
}

#[test]
fn test_palette_from_primary() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["palette", "--primary", "#3b82f6", "--json"], dir.path());

    assert_eq!(result["palette"]["accent"], "#f6af3b");
    assert_eq!(result["palette"]["secondary"], "#e34e86");
    assert_eq!(result["wcagAa"], true);
}

#[test]
fn test_recommend_unknown_style_uses_modern() {
    let dir = TempDir::new().unwrap();
    let unknown = run_json(&["recommend", "brutalist", "--json"], dir.path());
    let modern = run_json(&["recommend", "modern", "--json"], dir.path());
    assert_eq!(unknown, modern);
}

// ============================================================================
// Scoring Commands
// ============================================================================

#[test]
fn test_score_layout_file() {
    let dir = TempDir::new().unwrap();
    let layout = write_json(dir.path(), "layout.json", &landing_layout_json());
    let request = write_json(
        dir.path(),
        "request.json",
        &json!({"contentHierarchy": ["headline"], "userFlow": ["read", "buy"]}),
    );

    let result = run_json(
        &[
            "score",
            layout.to_str().unwrap(),
            "--request",
            request.to_str().unwrap(),
            "--json",
        ],
        dir.path(),
    );

    assert_eq!(result["metrics"]["conversionPotential"], 100);
    assert_eq!(result["metrics"]["engagementScore"], 98);
    assert_eq!(result["metrics"]["accessibilityScore"], 100);
    assert_eq!(result["metrics"]["performanceScore"], 100);
}

#[test]
fn test_score_empty_layout() {
    let dir = TempDir::new().unwrap();
    let layout = write_json(dir.path(), "empty.json", &json!({"sections": []}));

    let result = run_json(&["score", layout.to_str().unwrap(), "--json"], dir.path());

    assert_eq!(result["metrics"]["conversionPotential"], 50);
    assert_eq!(result["metrics"]["engagementScore"], 60);
    assert_eq!(result["metrics"]["accessibilityScore"], 70);
    assert_eq!(result["metrics"]["performanceScore"], 90);
}

#[test]
fn test_score_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = run(&["score", missing.to_str().unwrap()], dir.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_complexity() {
    let dir = TempDir::new().unwrap();
    let content = write_json(
        dir.path(),
        "content.json",
        &json!({"title": "Welcome", "features": ["a", "b", "c", "d"]}),
    );

    let result = run_json(&["complexity", content.to_str().unwrap(), "--json"], dir.path());
    assert_eq!(result["complexity"], 2);
    assert_eq!(result["max"], 10);
}

// ============================================================================
// Fallback and Suggest Commands
// ============================================================================

#[test]
fn test_fallback_layout_unknown_page_uses_homepage() {
    let dir = TempDir::new().unwrap();
    let unknown = run_json(&["fallback", "layout", "spaceship", "--json"], dir.path());
    let homepage = run_json(&["fallback", "layout", "homepage", "--json"], dir.path());

    assert_eq!(unknown, homepage);
    assert_eq!(homepage["gridSystem"]["columns"], 12);
}

#[test]
fn test_fallback_seo() {
    let dir = TempDir::new().unwrap();
    let result = run_json(
        &["fallback", "seo", "--industry", "legal", "--business-name", "Hale & Co", "--json"],
        dir.path(),
    );

    assert!(result["title"].as_str().unwrap().contains("Hale & Co"));
    assert!(!result["metaDescription"].as_str().unwrap().is_empty());
}

#[test]
fn test_suggest_offline_returns_fallback() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["suggest", "palette", "--industry", "finance", "--json"], dir.path());

    assert_eq!(result["source"], "fallback");
    assert!(result["id"].is_string());
    assert!(result["generatedAt"].is_string());
    assert!(result["palette"]["primary"].is_string());
}

#[test]
fn test_suggest_layout_offline() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["suggest", "layout", "pricing", "--json"], dir.path());

    assert_eq!(result["source"], "fallback");
    assert!(result["layout"]["sections"].as_array().unwrap().len() > 3);
    assert!(result["metrics"]["performanceScore"].as_u64().unwrap() <= 100);
}

// ============================================================================
// Config Commands
// ============================================================================

#[test]
fn test_config_show_defaults_json() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["config", "show", "--json"], dir.path());

    assert!(result["ai"].is_object(), "Should have ai object");
    assert!(result["defaults"].is_object(), "Should have defaults object");
    assert_eq!(result["server"]["port"], 3001);
}

#[test]
fn test_config_set_persists() {
    let dir = TempDir::new().unwrap();

    let output = run(&["config", "set", "defaults.industry", "healthcare"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("config.toml").exists());

    let result = run_json(&["config", "show", "--json"], dir.path());
    assert_eq!(result["defaults"]["industry"], "healthcare");
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();

    assert_eq!(run(&["config", "set", "ai.temperature", "9"], dir.path()).status.code(), Some(1));
    assert_eq!(run(&["config", "set", "no.such.key", "1"], dir.path()).status.code(), Some(1));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_path_uses_override() {
    let dir = TempDir::new().unwrap();
    let output = run(&["config", "path"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(dir.path().to_str().unwrap()));
}
