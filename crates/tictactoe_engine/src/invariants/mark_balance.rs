//! Mark balance invariant: X never trails O, and never leads by more than one.

use super::Invariant;
use crate::{GameView, Player};
use tracing::warn;

/// Invariant: X moves first and players alternate, so `#X - #O` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameView> for MarkBalanceInvariant {
    fn holds(view: &GameView) -> bool {
        let x_count = view.board().count(Player::X);
        let o_count = view.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}
