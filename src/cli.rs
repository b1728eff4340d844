//! Command-line interface for tictactoe_backend.

use clap::{Parser, Subcommand};

/// Tic-tac-toe backend - in-memory game server with a REST API
#[derive(Parser, Debug)]
#[command(name = "tictactoe_backend")]
#[command(about = "In-memory tic-tac-toe game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Allowed CORS origin, repeatable (overrides config file)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },
}
