//! The nine squares of the board as a closed set.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board, in row-major order.
///
/// Any `Position` is in range by construction; raw `(row, col)` pairs are
/// converted with [`Position::from_coords`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a zero-based row and column.
    ///
    /// Returns `None` when either coordinate is outside `0..=2`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Iterates positions in row-major order.
    pub fn iter_all() -> impl Iterator<Item = Position> {
        Self::iter()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_roundtrip_every_square() {
        for pos in Position::iter_all() {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_rejects_out_of_range() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_coords(usize::MAX, 1), None);
    }

    #[test]
    fn test_index_matches_row_major_order() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::BottomCenter.to_string(), "Bottom-center (2, 1)");
    }
}
