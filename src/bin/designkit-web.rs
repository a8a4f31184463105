//! designkit Web Server Binary
//!
//! This binary starts the designkit REST API used by website builders for
//! palettes, layout scores, fallbacks and AI suggestions.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured address (default 127.0.0.1:3001)
//! designkit-web
//!
//! # Override port and host
//! designkit-web --port 8080 --host 0.0.0.0
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use designkit::config::Config;
use designkit::web;

/// designkit Web Server - REST API for design heuristics and AI suggestions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to server.port from the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to server.host from the config file)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let config = Config::load().unwrap_or_default();

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!(model = %config.ai.model, "Loaded configuration");

    web::run_server(config, addr).await
}
