//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game, and the mark they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character drawn for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character drawn for this square; a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Result of evaluating a board for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty square.
    Ongoing,
    /// Board full with no completed line.
    Tie,
    /// The player owning a completed line.
    Win(Player),
}

impl Outcome {
    /// True for `Tie` and `Win`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Square::Empty.symbol(), ' ');
        assert_eq!(Square::Occupied(Player::X).symbol(), 'X');
        assert_eq!(Square::Occupied(Player::O).symbol(), 'O');
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Tie.is_terminal());
        assert!(Outcome::Win(Player::X).is_terminal());
    }
}
