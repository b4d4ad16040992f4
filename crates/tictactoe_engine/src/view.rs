//! Read-only snapshot of the engine state.

use crate::rules::WinLine;
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Owned snapshot of a game, handed to whatever renders it.
///
/// The board is copied out of the engine, so writing to a view can never
/// reach engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameView {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl GameView {
    pub(crate) fn new(board: Board, active_player: Player, status: GameStatus) -> Self {
        Self {
            board,
            active_player,
            status,
        }
    }

    /// Board contents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next. Only meaningful while the game is in progress.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line to highlight, if the game was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
