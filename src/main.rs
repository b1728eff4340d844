//! Tic-tac-toe backend - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_backend::ServerConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            allow_origins,
        } => {
            init_tracing();
            let config = load_config(config.as_deref(), host, port, allow_origins)?;
            tictactoe_backend::run(config).await
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_backend=debug,tower_http=info")),
        )
        .init();
}

/// Config file (or defaults) with command-line overrides applied.
#[instrument]
fn load_config(
    path: Option<&std::path::Path>,
    host: Option<String>,
    port: Option<u16>,
    allow_origins: Vec<String>,
) -> Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            ServerConfig::default()
        }
    };

    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if !allow_origins.is_empty() {
        config = config.with_allowed_origins(allow_origins);
    }

    Ok(config)
}
