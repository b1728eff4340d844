//! Move validation errors.

use crate::position::Position;

/// Reasons a move is rejected.
///
/// All variants are the caller's fault: the game is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already reached a terminal status.
    #[display("Game is already finished")]
    GameFinished,

    /// The requested index is outside 0-8.
    #[display("Position must be between 0 and 8")]
    OutOfRange(i64),

    /// The square at the position is already occupied.
    #[display("Cell is already occupied")]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}
