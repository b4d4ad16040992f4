//! Turn consistency invariant: the active player matches the marks on the board.

use super::Invariant;
use crate::{GameStatus, GameView, Player};

/// Invariant: while the game is in progress, X is on move exactly when both
/// players have placed the same number of marks.
///
/// Terminal states are exempt; the winner keeps the move after a win.
pub struct TurnConsistentInvariant;

impl Invariant<GameView> for TurnConsistentInvariant {
    fn holds(view: &GameView) -> bool {
        if view.status() != GameStatus::InProgress {
            return true;
        }

        let expected = if view.board().count(Player::X) == view.board().count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        view.active_player() == expected
    }

    fn description() -> &'static str {
        "Active player follows from the marks on the board"
    }
}
