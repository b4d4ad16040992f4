//! Tic-tac-toe game engine.
//!
//! A [`GameEngine`] owns a 3x3 board, the player on move, and the game
//! status. A front end drives it with [`GameEngine::apply_move`] and
//! [`GameEngine::reset`], and reads [`GameEngine::view`] to redraw. The engine
//! never calls back into the front end.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player, WinLine};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 3, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//! let status = engine.apply_move(6).unwrap();
//! assert_eq!(
//!     status,
//!     GameStatus::Won { player: Player::X, line: WinLine::LeftColumn }
//! );
//! assert!(engine.apply_move(5).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use engine::GameEngine;
pub use error::MoveError;
pub use position::Position;
pub use rules::WinLine;
pub use types::{Board, GameStatus, Player, Square};
pub use view::GameView;
