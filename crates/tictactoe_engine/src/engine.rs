//! Game engine for tic-tac-toe.

use crate::error::MoveError;
use crate::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use crate::position::Position;
use crate::rules::winning_line;
use crate::types::{Board, GameStatus, Player, Square};
use crate::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board, the player on move, and the game status. The only ways to
/// change them are [`apply_move`](Self::apply_move) and [`reset`](Self::reset);
/// everything else reads a copied [`GameView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the active player's mark at `index` (0-8, row-major).
    ///
    /// Checks run in order: game over, index range, empty cell. A rejected move
    /// leaves the engine exactly as it was.
    ///
    /// After a mark is placed a win is checked before a draw, so a move that
    /// fills the last cell and completes a line is a win. The active player is
    /// only handed over when the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game was already won or drawn.
    /// - [`MoveError::InvalidIndex`] if `index` is not in 0-8.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = self.validate(index).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;

        let player = self.active_player;
        self.board.set(pos, Square::Occupied(player));
        debug!(position = %pos, "Mark placed");

        if let Some(line) = winning_line(&self.board, player) {
            self.status = GameStatus::Won { player, line };
            info!(%player, %line, "Game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.active_player = player.opponent();
        }

        debug_assert!(
            self.check_invariants().is_ok(),
            "engine invariants broken after move at {index}"
        );
        Ok(self.status)
    }

    fn validate(&self, index: usize) -> Result<Position, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        Ok(pos)
    }

    /// Restores the starting configuration: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Returns a snapshot of the current state.
    pub fn view(&self) -> GameView {
        GameView::new(self.board, self.active_player, self.status)
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player on move. After a win this is still the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Checks every engine invariant against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(&self.view())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WinLine;

    fn play(engine: &mut GameEngine, moves: &[usize]) -> GameStatus {
        let mut status = engine.status();
        for &index in moves {
            status = engine.apply_move(index).expect("legal move");
        }
        status
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.active_player(), Player::X);
        assert_eq!(*engine.view().board(), Board::new());
    }

    #[test]
    fn test_move_toggles_player() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(4), Ok(GameStatus::InProgress));
        assert_eq!(engine.active_player(), Player::O);
        assert_eq!(engine.view().board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_checks_game_over_before_index() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.apply_move(42), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_checks_index_before_occupancy() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(engine.apply_move(usize::MAX), Err(MoveError::InvalidIndex(usize::MAX)));
    }

    #[test]
    fn test_winner_keeps_the_move() {
        let mut engine = GameEngine::new();
        let status = play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(
            status,
            GameStatus::Won {
                player: Player::X,
                line: WinLine::TopRow
            }
        );
        assert_eq!(engine.active_player(), Player::X);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X O X / O X O / O X X: X's move at 8 fills the board and the diagonal.
        let mut engine = GameEngine::new();
        let status = play(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert!(engine.view().board().is_full());
        assert_eq!(
            status,
            GameStatus::Won {
                player: Player::X,
                line: WinLine::Diagonal
            }
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4, 0]);
        engine.reset();
        let once = engine.clone();
        engine.reset();
        assert_eq!(engine, once);
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_view_is_detached() {
        let mut engine = GameEngine::new();
        let before = engine.view();
        engine.apply_move(0).expect("legal move");
        assert_eq!(before.board().filled(), 0);
        assert_eq!(engine.view().board().filled(), 1);
    }
}
