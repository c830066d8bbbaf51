//! Fullness detection for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a tie.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.apply_move(1, 1).unwrap();
        board.apply_move(0, 0).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 0),
            (1, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ] {
            board.apply_move(row, col).unwrap();
        }
        assert!(is_full(&board));
    }
}
