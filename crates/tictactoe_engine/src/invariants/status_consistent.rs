//! Status consistency invariant: the reported status agrees with the board.

use super::Invariant;
use crate::rules::{is_draw, winning_line};
use crate::{GameStatus, GameView, Player};

/// Invariant: the status is exactly what the board implies.
///
/// - `Won { player, line }`: `line` is held by `player`.
/// - `Draw`: the board is full and no line is held.
/// - `InProgress`: no line is held and the board is not full.
pub struct StatusConsistentInvariant;

impl Invariant<GameView> for StatusConsistentInvariant {
    fn holds(view: &GameView) -> bool {
        let board = view.board();
        match view.status() {
            GameStatus::Won { player, line } => line.is_held_by(board, player),
            GameStatus::Draw => is_draw(board),
            GameStatus::InProgress => {
                !board.is_full()
                    && winning_line(board, Player::X).is_none()
                    && winning_line(board, Player::O).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Status matches the board (win line held, draw only when full)"
    }
}
