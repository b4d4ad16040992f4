//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from the
//! engine so invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WinLine, winning_line};
