//! The 3x3 board and the operations that drive a game.

use super::action::{Move, MoveError};
use super::rules;
use super::{Outcome, Player, Position, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Row separator used by [`Board::render`].
const SEPARATOR: &str = "-----";

/// 3x3 tic-tac-toe board plus whose turn it is.
///
/// The only way to change a board is [`Board::apply_move`] (or
/// [`Board::random_legal_move`], which goes through it). A failed move leaves
/// both the squares and the turn untouched.
///
/// Deserializing checks that the mark counts agree with the turn, so a board
/// read from outside can be played on like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Player whose mark the next move places.
    to_move: Player,
}

/// Serialized form of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRecord {
    squares: [Square; 9],
    to_move: Player,
}

/// A deserialized board whose marks could not come from legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// X has neither as many marks as O (X to move) nor one more (O to move).
    #[display("{x} X marks and {o} O marks do not fit {to_move} to move")]
    TurnMismatch {
        /// Squares holding X.
        x: usize,
        /// Squares holding O.
        o: usize,
        /// Recorded player to move.
        to_move: Player,
    },
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let board = Board {
            squares: record.squares,
            to_move: record.to_move,
        };
        if board.turn_matches_counts() {
            Ok(board)
        } else {
            let (x, o) = board.mark_counts();
            Err(BoardError::TurnMismatch {
                x,
                o,
                to_move: board.to_move,
            })
        }
    }
}

impl Board {
    /// Creates a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn square_at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all nine squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter_all().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game is over (a line is complete or the board is full).
    pub fn is_terminal(&self) -> bool {
        self.winner().is_terminal()
    }

    /// Places the current player's mark at `(row, col)` and passes the turn.
    ///
    /// Fails with [`MoveError::OutOfRange`] when either coordinate is outside
    /// `0..=2` and with [`MoveError::CellOccupied`] when the square already
    /// holds a mark.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        let Some(position) = Position::from_coords(row, col) else {
            debug!("Rejected out-of-range move");
            return Err(MoveError::OutOfRange { row, col });
        };

        if !self.is_empty(position) {
            debug!("Rejected move onto occupied square");
            return Err(MoveError::CellOccupied { row, col });
        }

        let action = Move::new(self.to_move, position);
        self.squares[position.to_index()] = Square::Occupied(action.player);
        self.to_move = action.player.opponent();
        debug_assert!(self.turn_matches_counts(), "turn out of step with marks");

        debug!(%action, "Move applied");
        Ok(action)
    }

    /// Picks an empty square uniformly at random and plays it.
    ///
    /// Behaves exactly like [`Board::apply_move`] on the chosen square. Fails
    /// with [`MoveError::NoLegalMoves`] when the board is full.
    #[instrument(skip(self, rng), fields(to_move = %self.to_move))]
    pub fn random_legal_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, MoveError> {
        let available = self.empty_positions();
        if available.is_empty() {
            warn!("Random move requested on a full board");
            return Err(MoveError::NoLegalMoves);
        }

        let choice = available[rng.random_range(0..available.len())];
        self.apply_move(choice.row(), choice.col())
    }

    /// Evaluates the board.
    ///
    /// A complete line wins even when the board is also full; `Tie` is only
    /// reported for a full board without one.
    pub fn winner(&self) -> Outcome {
        if let Some(player) = rules::check_winner(self) {
            Outcome::Win(player)
        } else if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::Ongoing
        }
    }

    /// Formats the board as five lines: three `a|b|c` rows separated by
    /// `-----`, with a space for each empty square and no trailing newline.
    pub fn render(&self) -> String {
        self.squares
            .chunks(3)
            .map(|row| format!("{}|{}|{}", row[0].symbol(), row[1].symbol(), row[2].symbol()))
            .collect::<Vec<_>>()
            .join(&format!("\n{SEPARATOR}\n"))
    }

    /// X moves first, so X has either as many marks as O (X to move) or one
    /// more (O to move).
    fn turn_matches_counts(&self) -> bool {
        let (x, o) = self.mark_counts();
        match self.to_move {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    /// Number of X marks and of O marks.
    fn mark_counts(&self) -> (usize, usize) {
        let count = |p| self.squares.iter().filter(|s| **s == Square::Occupied(p)).count();
        (count(Player::X), count(Player::O))
    }

    /// Builds a board from three row strings of `X`, `O` or space, skipping
    /// every legality check.
    #[cfg(test)]
    pub(crate) fn from_squares_unchecked(rows: [&str; 3], to_move: Player) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                squares[r * 3 + c] = match ch {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
            }
        }
        Self { squares, to_move }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
