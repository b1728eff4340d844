//! Tic-tac-toe backend library.
//!
//! Keeps games in memory and exposes them over a small REST API.
//!
//! # Architecture
//!
//! - **Engine**: game rules, in the `tictactoe_engine` crate
//! - **Registry**: identifier → game map shared by all requests
//! - **API**: axum router mapping HTTP onto registry operations
//! - **Config**: bind address and CORS origins
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_backend::{GameRegistry, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let registry = GameRegistry::new();
//! let app = router(registry, &ServerConfig::default())?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod registry;
mod server;

// Crate-level exports - API
pub use api::{ApiError, CreateGameResponse, ErrorBody, HealthResponse, MoveRequest, router};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Registry
pub use registry::{GameId, GameRegistry, RegistryError};

// Crate-level exports - Server startup
pub use server::run;

// Crate-level exports - Game types
pub use tictactoe_engine::{Board, Game, GameStatus, MoveError, Player, Position, Square};
