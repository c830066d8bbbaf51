//! Uniform random move selection.

use super::{Board, Move, MoveError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// An AI that plays a uniformly random empty square.
///
/// Owns its randomness so callers can inject a seed for reproducible games;
/// the default is seeded from the operating system.
#[derive(Debug, Clone)]
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    /// Creates an AI seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an AI whose choices are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` when given, the operating system otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Plays one random legal move on `board`.
    #[instrument(skip_all)]
    pub fn play(&mut self, board: &mut Board) -> Result<Move, MoveError> {
        let action = board.random_legal_move(&mut self.rng)?;
        debug!(%action, "AI chose move");
        Ok(action)
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ai_plays_full_game() {
        let mut ai = RandomAi::new();
        let mut board = Board::new();
        let mut moves = 0;
        while !board.is_terminal() {
            ai.play(&mut board).unwrap();
            moves += 1;
        }
        assert!(moves <= 9);
        assert_eq!(board.move_count(), moves);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let run = |seed| {
            let mut ai = RandomAi::seeded(seed);
            let mut board = Board::new();
            let mut history = Vec::new();
            while !board.is_terminal() {
                history.push(ai.play(&mut board).unwrap());
            }
            history
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_play_on_full_board_errors() {
        let mut ai = RandomAi::from_seed(Some(3));
        let mut board = Board::new();
        while !board.is_full() {
            board.random_legal_move(&mut rand::rng()).unwrap();
        }
        assert_eq!(ai.play(&mut board), Err(MoveError::NoLegalMoves));
    }
}
