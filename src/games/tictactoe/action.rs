//! Moves and move errors for tic-tac-toe.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error returned when a move cannot be applied.
///
/// The board is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside the 3x3 grid.
    #[display("bad input: ({row}, {col})")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target square already holds a mark.
    #[display("cannot overwrite mark at: ({row}, {col})")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A random move was requested on a board with no empty squares.
    #[display("no legal moves: board is full")]
    NoLegalMoves,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfRange { row: 3, col: 0 }.to_string(),
            "bad input: (3, 0)"
        );
        assert_eq!(
            MoveError::CellOccupied { row: 0, col: 2 }.to_string(),
            "cannot overwrite mark at: (0, 2)"
        );
        assert_eq!(
            MoveError::NoLegalMoves.to_string(),
            "no legal moves: board is full"
        );
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::X, Position::Center);
        assert_eq!(mv.to_string(), "X -> Center (1, 1)");
    }
}
