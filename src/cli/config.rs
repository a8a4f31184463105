//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set a configuration value
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Dotted key, e.g. "ai.model" or "defaults.industry"
    #[arg(value_name = "KEY")]
    key: String,

    /// New value; an empty string clears defaults.* keys
    #[arg(value_name = "VALUE")]
    value: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load().unwrap_or_default();

        config
            .set(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("=======================");
    println!();

    println!("AI:");
    println!("  Base URL:     {}", config.ai.base_url);
    println!("  Model:        {}", config.ai.model);
    println!(
        "  API key env:  {} ({})",
        config.ai.api_key_env,
        if config.ai.api_key().is_some() { "set" } else { "not set" }
    );
    println!("  Max tokens:   {}", config.ai.max_tokens);
    println!("  Temperature:  {}", config.ai.temperature);
    println!("  Timeout:      {}s", config.ai.timeout_secs);
    println!("  Max retries:  {}", config.ai.max_retries);
    println!();

    println!("Defaults:");
    println!(
        "  Industry:     {}",
        config.defaults.industry.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  Style:        {}",
        config.defaults.style.as_deref().unwrap_or("(not set)")
    );
    println!();

    println!("Server:");
    println!("  Address:      {}:{}", config.server.host, config.server.port);
    println!();
}
