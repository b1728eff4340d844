//! Route handlers.
//!
//! Each handler parses the request, calls one registry operation and
//! serializes the result.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tictactoe_engine::Game;
use tracing::{debug, instrument, warn};

use super::error::ApiError;
use super::models::{CreateGameResponse, HealthResponse, MoveRequest};
use crate::registry::{GameId, GameRegistry};

/// `GET /`
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::new("Healthy".to_string()))
}

/// `POST /games`
#[instrument(skip(registry))]
pub async fn create_game(
    State(registry): State<GameRegistry>,
) -> (StatusCode, Json<CreateGameResponse>) {
    let game_id = registry.create();
    (StatusCode::CREATED, Json(CreateGameResponse::new(game_id)))
}

/// `GET /games/{gameId}`
#[instrument(skip(registry))]
pub async fn get_game(
    State(registry): State<GameRegistry>,
    Path(game_id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    let id = parse_game_id(&game_id)?;
    let game = registry.get(&id)?;
    Ok(Json(game))
}

/// `POST /games/{gameId}/moves`
#[instrument(skip(registry, payload))]
pub async fn make_move(
    State(registry): State<GameRegistry>,
    Path(game_id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<Game>, ApiError> {
    let id = parse_game_id(&game_id)?;
    let Json(request) = payload?;
    debug!(game_id = %id, position = request.position, "Move requested");

    let game = registry.make_move(&id, request.position)?;
    Ok(Json(game))
}

/// Identifiers are only ever issued by the registry, so a string that does
/// not parse cannot name a game.
fn parse_game_id(raw: &str) -> Result<GameId, ApiError> {
    raw.parse::<GameId>().map_err(|e| {
        warn!(game_id = raw, error = %e, "Malformed game id");
        ApiError::not_found("Game not found")
    })
}
