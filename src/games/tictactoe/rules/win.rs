//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Every line of three, in scan order: rows top to bottom, columns left to
/// right, then the main diagonal and the anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order, or
/// `None` when no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in moves {
            board.apply_move(row, col).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = play(&[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = play(&[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = play(&[(0, 0), (1, 1), (0, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Unreachable in play, but the scan order must stay deterministic:
        // top row X beats bottom row O.
        let board = Board::from_squares_unchecked(
            [
                "XXX", //
                "   ", //
                "OOO",
            ],
            Player::X,
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
