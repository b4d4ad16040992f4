//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::types::{Board, Player};

/// A full board that neither player has won.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && winning_line(board, Player::X).is_none()
        && winning_line(board, Player::O).is_none()
}
