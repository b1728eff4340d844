//! Game state and move application for tic-tac-toe.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single tic-tac-toe game.
///
/// Created with all squares empty, `X` to move and status `InProgress`.
/// Each accepted move fills exactly one square; once the status is terminal
/// the game rejects every further move.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    board: Board,
    next_player: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// After a game-ending move this stays on the player who made it.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Makes a move at the given board index.
    ///
    /// Checks, in order: the game is still in progress, the index is within
    /// 0-8, the square is empty. On error the game is unchanged.
    #[instrument(skip(self), fields(player = %self.next_player, status = %self.status))]
    pub fn apply_move(&mut self, position: i64) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameFinished);
        }

        let pos = Position::try_from(position)?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.next_player));
        self.update_status();

        debug!(
            position = %pos,
            status = %self.status,
            board = %self.board.display(),
            "Move applied"
        );

        Ok(())
    }

    /// Recomputes the status after a move and passes the turn if play goes on.
    fn update_status(&mut self) {
        self.status = if let Some(winner) = check_winner(&self.board) {
            GameStatus::won_by(winner)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        if !self.status.is_terminal() {
            self.next_player = self.next_player.opponent();
        }
    }
}
