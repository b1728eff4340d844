//! REST API over the game registry.

mod error;
mod handlers;
mod models;

pub use error::ApiError;
pub use models::{CreateGameResponse, ErrorBody, HealthResponse, MoveRequest};

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, instrument};

use crate::config::{ConfigError, ServerConfig};
use crate::registry::GameRegistry;

/// Builds the application router.
///
/// # Errors
///
/// Returns [`ConfigError`] if an allowed origin is not a valid header value
/// or is the `*` wildcard, which browsers refuse together with credentials.
#[instrument(skip(registry, config))]
pub fn router(registry: GameRegistry, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = cors_layer(config.allowed_origins())?;

    Ok(Router::new()
        .route("/", get(handlers::health))
        .route("/games", post(handlers::create_game))
        .route("/games/{game_id}", get(handlers::get_game))
        .route("/games/{game_id}/moves", post(handlers::make_move))
        .with_state(registry)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
}

/// CORS for the listed origins, with credentials, any method and any header.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::new(
                    "Wildcard CORS origin cannot be combined with credentials",
                ));
            }
            HeaderValue::from_str(origin)
                .map_err(|e| ConfigError::new(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(origins = ?origins, "Configured CORS origins");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
