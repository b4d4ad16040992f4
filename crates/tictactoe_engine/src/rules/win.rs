//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// One of the eight lines that wins the game when held by a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum WinLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    Diagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in evaluation order: rows, columns, diagonals.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::Diagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::Diagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// Whether all three squares hold `player`'s mark.
    pub fn is_held_by(self, board: &Board, player: Player) -> bool {
        self.positions()
            .iter()
            .all(|p| board.get(*p) == Square::Occupied(player))
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            WinLine::TopRow => "top row",
            WinLine::MiddleRow => "middle row",
            WinLine::BottomRow => "bottom row",
            WinLine::LeftColumn => "left column",
            WinLine::CenterColumn => "center column",
            WinLine::RightColumn => "right column",
            WinLine::Diagonal => "diagonal",
            WinLine::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the first line held entirely by `player`.
///
/// Lines are checked in [`WinLine::ALL`] order, so the result is deterministic
/// even if a board somehow holds more than one line.
pub fn winning_line(board: &Board, player: Player) -> Option<WinLine> {
    WinLine::ALL
        .into_iter()
        .find(|line| line.is_held_by(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Player::X), None);
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(winning_line(&board, Player::X), Some(WinLine::TopRow));
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(winning_line(&board, Player::O), Some(WinLine::AntiDiagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_first_line_reported_when_several_hold() {
        // Left column and top row both held; rows come first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(winning_line(&board, Player::X), Some(WinLine::TopRow));
    }

    #[test]
    fn test_line_indices() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, indices) in WinLine::ALL.iter().zip(expected) {
            assert_eq!(line.indices(), indices);
        }
    }

    #[test]
    fn test_all_matches_declaration_order() {
        use strum::IntoEnumIterator;
        assert_eq!(WinLine::iter().collect::<Vec<_>>(), WinLine::ALL.to_vec());
    }

    #[test]
    fn test_contains() {
        assert!(WinLine::Diagonal.contains(Position::Center));
        assert!(!WinLine::Diagonal.contains(Position::TopRight));
    }
}
