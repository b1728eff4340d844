//! Pure tic-tac-toe game logic.
//!
//! A [`Game`] owns a 3x3 [`Board`], the [`Player`] to move and a
//! [`GameStatus`]. [`Game::apply_move`] is the only way to change it:
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for position in [0, 1, 4, 2, 8] {
//!     game.apply_move(position)?;
//! }
//! assert_eq!(game.status(), GameStatus::XWon);
//! assert_eq!(game.status().winner(), Some(Player::X));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
