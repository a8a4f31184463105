//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::{Industry, Style};

/// Upstream model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Token limit per completion
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for transient failures
    pub max_retries: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            timeout_secs: 60,
            max_retries: 3,
        }
    }
}

impl AiConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// Returns `None` when the variable is unset or blank.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Defaults applied when a request leaves a field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Industry key
    pub industry: Option<String>,
    /// Style key
    pub style: Option<String>,
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Application configuration.
///
/// Validation rules:
/// - `ai.temperature` must be within 0.0 - 2.0
/// - `ai.max_tokens` and `ai.timeout_secs` must be positive
/// - `defaults.industry` and `defaults.style` must be known keys when set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Upstream model settings
    pub ai: AiConfig,
    /// Request defaults
    pub defaults: DefaultsConfig,
    /// Web server settings
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `DESIGNKIT_CONFIG_DIR` wins when set; otherwise:
    /// - Linux: `~/.config/designkit/`
    /// - macOS: `~/Library/Application Support/designkit/`
    /// - Windows: `%APPDATA%\designkit\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            anyhow::bail!(
                "ai.temperature must be between 0.0 and 2.0, got {}",
                self.ai.temperature
            );
        }
        if self.ai.max_tokens == 0 {
            anyhow::bail!("ai.max_tokens must be greater than 0");
        }
        if self.ai.timeout_secs == 0 {
            anyhow::bail!("ai.timeout_secs must be greater than 0");
        }
        if self.ai.base_url.trim().is_empty() {
            anyhow::bail!("ai.base_url must not be empty");
        }

        if let Some(industry) = &self.defaults.industry {
            if Industry::from_key(industry).is_none() {
                anyhow::bail!(
                    "Unknown industry '{industry}'. Expected one of: {}",
                    Industry::ALL.map(Industry::key).join(", ")
                );
            }
        }
        if let Some(style) = &self.defaults.style {
            if Style::from_key(style).is_none() {
                anyhow::bail!(
                    "Unknown style '{style}'. Expected one of: {}",
                    Style::ALL.map(Style::key).join(", ")
                );
            }
        }

        Ok(())
    }

    /// Dotted keys accepted by [`Config::set`].
    pub const KEYS: [&'static str; 11] = [
        "ai.base_url",
        "ai.model",
        "ai.api_key_env",
        "ai.max_tokens",
        "ai.temperature",
        "ai.timeout_secs",
        "ai.max_retries",
        "defaults.industry",
        "defaults.style",
        "server.host",
        "server.port",
    ];

    /// Sets a value by dotted key (e.g. `ai.model`), then validates.
    ///
    /// An empty value clears the optional `defaults.*` keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let optional = |v: &str| (!v.trim().is_empty()).then(|| v.trim().to_string());

        match key {
            "ai.base_url" => self.ai.base_url = value.to_string(),
            "ai.model" => self.ai.model = value.to_string(),
            "ai.api_key_env" => self.ai.api_key_env = value.to_string(),
            "ai.max_tokens" => {
                self.ai.max_tokens = value
                    .parse()
                    .context(format!("Invalid value for {key}: {value}"))?;
            }
            "ai.temperature" => {
                self.ai.temperature = value
                    .parse()
                    .context(format!("Invalid value for {key}: {value}"))?;
            }
            "ai.timeout_secs" => {
                self.ai.timeout_secs = value
                    .parse()
                    .context(format!("Invalid value for {key}: {value}"))?;
            }
            "ai.max_retries" => {
                self.ai.max_retries = value
                    .parse()
                    .context(format!("Invalid value for {key}: {value}"))?;
            }
            "defaults.industry" => self.defaults.industry = optional(value),
            "defaults.style" => self.defaults.style = optional(value),
            "server.host" => self.server.host = value.to_string(),
            "server.port" => {
                self.server.port = value
                    .parse()
                    .context(format!("Invalid value for {key}: {value}"))?;
            }
            _ => anyhow::bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                Self::KEYS.join(", ")
            ),
        }

        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ai.max_tokens, 2000);
        assert_eq!(config.server.port, 3001);
        assert!(config.defaults.industry.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_temperature() {
        let mut config = Config::new();
        config.ai.temperature = 2.5;
        assert!(config.validate().is_err());
        config.ai.temperature = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_defaults() {
        let mut config = Config::new();
        config.defaults.industry = Some("finance".to_string());
        config.defaults.style = Some("earthy".to_string());
        assert!(config.validate().is_ok());

        config.defaults.style = Some("brutalist".to_string());
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("Unknown style"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ai.model = "local-model".to_string();
        config.defaults.industry = Some("legal".to_string());
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ai]\nmodel = \"tiny\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.ai.model, "tiny");
        assert_eq!(loaded.ai.max_tokens, 2000);
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn test_config_set() {
        let mut config = Config::new();
        config.set("ai.temperature", "1.2").unwrap();
        assert!((config.ai.temperature - 1.2).abs() < f32::EPSILON);

        config.set("defaults.style", "pastel").unwrap();
        assert_eq!(config.defaults.style.as_deref(), Some("pastel"));
        config.set("defaults.style", "").unwrap();
        assert!(config.defaults.style.is_none());

        assert!(config.set("server.port", "eighty").is_err());
        assert!(config.set("ui.theme", "dark").is_err());
        assert!(config.set("ai.temperature", "3").is_err());
    }
}
