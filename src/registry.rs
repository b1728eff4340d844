//! In-memory game registry shared by request handlers.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Game, MoveError};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Opaque unique identifier for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum RegistryError {
    /// No game was ever created under this identifier.
    #[display("Game not found")]
    NotFound(GameId),

    /// The engine rejected the move.
    #[display("{_0}")]
    #[from]
    InvalidMove(MoveError),
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::NotFound(_) => None,
            RegistryError::InvalidMove(e) => Some(e),
        }
    }
}

/// Maps game identifiers to live games.
///
/// Cloning yields another handle to the same games. Every operation holds a
/// single lock for its whole lookup-and-mutate step, so concurrent moves on
/// one game are applied one after the other.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    /// Locks the game map.
    ///
    /// A poisoned lock is taken over as is: entries are plain values and a
    /// failed move never leaves one partially updated.
    fn games(&self) -> MutexGuard<'_, HashMap<GameId, Game>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a fresh game and returns its identifier.
    #[instrument(skip(self))]
    pub fn create(&self) -> GameId {
        let mut games = self.games();

        let mut id = GameId::new();
        while games.contains_key(&id) {
            id = GameId::new();
        }
        games.insert(id, Game::new());

        info!(game_id = %id, total = games.len(), "Created new game");
        id
    }

    /// Returns a snapshot of the game.
    #[instrument(skip(self))]
    pub fn get(&self, id: &GameId) -> Result<Game, RegistryError> {
        let games = self.games();

        match games.get(id) {
            Some(game) => {
                debug!(game_id = %id, status = %game.status(), "Game found");
                Ok(game.clone())
            }
            None => {
                warn!(game_id = %id, "Game not found");
                Err(RegistryError::NotFound(*id))
            }
        }
    }

    /// Applies a move to the stored game and returns the updated game.
    #[instrument(skip(self))]
    pub fn make_move(&self, id: &GameId, position: i64) -> Result<Game, RegistryError> {
        let mut games = self.games();

        let game = games.get_mut(id).ok_or_else(|| {
            warn!(game_id = %id, "Move on unknown game");
            RegistryError::NotFound(*id)
        })?;

        let player = game.next_player();
        game.apply_move(position).map_err(|e| {
            warn!(game_id = %id, position, error = %e, "Invalid move");
            e
        })?;

        info!(
            game_id = %id,
            %player,
            position,
            status = %game.status(),
            "Move completed successfully"
        );

        Ok(game.clone())
    }

    /// Number of games created since startup.
    pub fn len(&self) -> usize {
        self.games().len()
    }

    /// True if no game has been created yet.
    pub fn is_empty(&self) -> bool {
        self.games().is_empty()
    }
}
