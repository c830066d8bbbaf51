//! Random self-play.

use crate::games::tictactoe::{Board, MoveError, Outcome, Player, RandomAi};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Aggregate results of many random-vs-random games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: u64,
    /// Games won by X.
    pub x_wins: u64,
    /// Games won by O.
    pub o_wins: u64,
    /// Games ending in a tie.
    pub ties: u64,
    /// Moves played across all games.
    pub total_moves: u64,
}

impl SimulationStats {
    /// Mean moves per game; zero when no games were played.
    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }

    /// Sum of all classified outcomes. Equals `games` for a finished run.
    pub fn decided(&self) -> u64 {
        self.x_wins + self.o_wins + self.ties
    }

    fn record(&mut self, outcome: Outcome, moves: usize) {
        self.games += 1;
        self.total_moves += moves as u64;
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Ongoing => unreachable!("recorded a game that had not ended"),
        }
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games: {}", self.games)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        writeln!(f, "ties: {}", self.ties)?;
        write!(f, "avg. moves: {:.2}", self.average_moves())
    }
}

/// Plays one game from an empty board until it ends.
///
/// Returns the outcome and the number of moves played (at most 9).
pub fn play_random_game(ai: &mut RandomAi) -> Result<(Outcome, usize), MoveError> {
    let mut board = Board::new();
    loop {
        let outcome = board.winner();
        if outcome.is_terminal() {
            return Ok((outcome, board.move_count()));
        }
        ai.play(&mut board)?;
    }
}

/// Plays `games` random games and tallies the outcomes.
#[instrument(skip(ai))]
pub fn simulate(games: u64, ai: &mut RandomAi) -> Result<SimulationStats, MoveError> {
    let mut stats = SimulationStats::default();
    for game in 0..games {
        let (outcome, moves) = play_random_game(ai)?;
        debug!(game, ?outcome, moves, "Game finished");
        stats.record(outcome, moves);
    }
    info!(
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        ties = stats.ties,
        "Simulation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_games() {
        let stats = simulate(0, &mut RandomAi::seeded(1)).unwrap();
        assert_eq!(stats, SimulationStats::default());
        assert_eq!(stats.average_moves(), 0.0);
    }

    #[test]
    fn test_every_game_is_classified() {
        let stats = simulate(2_000, &mut RandomAi::seeded(11)).unwrap();
        assert_eq!(stats.games, 2_000);
        assert_eq!(stats.decided(), stats.games);
        assert!(stats.average_moves() >= 5.0 && stats.average_moves() <= 9.0);
    }

    #[test]
    fn test_seeded_runs_match() {
        let a = simulate(500, &mut RandomAi::seeded(8)).unwrap();
        let b = simulate(500, &mut RandomAi::seeded(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let stats = SimulationStats {
            games: 4,
            x_wins: 2,
            o_wins: 1,
            ties: 1,
            total_moves: 30,
        };
        assert_eq!(
            stats.to_string(),
            "games: 4\nX wins: 2\nO wins: 1\nties: 1\navg. moves: 7.50"
        );
    }
}
