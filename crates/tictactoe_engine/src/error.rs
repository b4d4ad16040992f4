//! Move rejection errors.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
///
/// Every variant is recoverable: the engine leaves its state untouched, so a
/// caller that only cares about the resulting view can ignore the error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
    derive_more::Error,
)]
pub enum MoveError {
    /// The index does not name a cell (must be 0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The targeted cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::InvalidIndex(9).to_string(),
            "Cell index 9 is out of range (must be 0-8)"
        );
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(MoveError::GameAlreadyOver.to_string(), "Game is already over");
    }
}
