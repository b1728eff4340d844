//! Request and response bodies.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::registry::GameId;

/// Response to `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HealthResponse {
    /// Always `"Healthy"`.
    pub message: String,
}

/// Response to `POST /games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    /// Identifier of the new game.
    pub game_id: GameId,
}

/// Body of `POST /games/{gameId}/moves`.
///
/// Signed so that negative positions reach the engine and are rejected
/// there with the range message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Board index, 0 (top-left) to 8 (bottom-right).
    pub position: i64,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub detail: String,
}
