//! Line-based interactive game loop.
//!
//! Reads one command per line, applies it to a [`Board`], and prints the
//! board after every step. Generic over reader and writer so a whole game can
//! be driven from a string.

use crate::config::GameConfig;
use crate::games::tictactoe::{Board, Outcome, RandomAi};
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current player's mark at `(row, col)`.
    Move {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Let the random AI place the current player's mark.
    Ai,
    /// Stop playing.
    Quit,
}

/// Input that is neither a command nor a `row,col` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Wrong field count, non-numeric field, or a value above 2.
    #[display("bad input: {input}")]
    Malformed {
        /// The trimmed line as typed.
        input: String,
    },
}

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The board reached a win or a tie.
    GameOver(Outcome),
    /// The player quit, or input ran out.
    Quit,
}

/// Parses one line of input.
///
/// Surrounding whitespace is ignored. Commands are matched exactly;
/// coordinates are two comma-separated unsigned integers, each at most 2,
/// with nothing else in the field.
pub fn parse_input(line: &str, config: &GameConfig) -> Result<Input, InputError> {
    let line = line.trim();
    if line == config.ai_command() {
        return Ok(Input::Ai);
    }
    if line == config.quit_command() {
        return Ok(Input::Quit);
    }

    let malformed = || InputError::Malformed {
        input: line.to_string(),
    };
    let fields: Vec<&str> = line.split(',').collect();
    let [row, col] = fields.as_slice() else {
        return Err(malformed());
    };
    let row = parse_coordinate(row).ok_or_else(malformed)?;
    let col = parse_coordinate(col).ok_or_else(malformed)?;
    Ok(Input::Move { row, col })
}

fn parse_coordinate(field: &str) -> Option<usize> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<usize>().ok().filter(|value| *value <= 2)
}

/// Interactive session over one board.
#[derive(Debug)]
pub struct Console {
    board: Board,
    ai: RandomAi,
    config: GameConfig,
}

impl Console {
    /// Creates a session with a fresh board.
    pub fn new(config: GameConfig) -> Self {
        let ai = RandomAi::from_seed(*config.seed());
        Self {
            board: Board::new(),
            ai,
            config,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the game ends, the player quits, or input runs out.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<Finish> {
        writeln!(out, "Welcome to Tic Tac Toe!")?;
        writeln!(
            out,
            "Enter a move as 'row,col' (0-2), or '{}' for a random move.",
            self.config.ai_command()
        )?;
        writeln!(out, "Type '{}' to quit the game.", self.config.quit_command())?;

        let mut line = String::new();
        loop {
            writeln!(out, "{}", self.board)?;

            let outcome = self.board.winner();
            match outcome {
                Outcome::Ongoing => {}
                Outcome::Tie => {
                    writeln!(out, "Tied game.")?;
                    return self.game_over(outcome, &mut out);
                }
                Outcome::Win(player) => {
                    writeln!(out, "WE HAVE A WINNER: {player}")?;
                    return self.game_over(outcome, &mut out);
                }
            }

            write!(out, "{}", self.config.prompt())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("Input closed, ending game");
                writeln!(out)?;
                writeln!(out, "Thank you for playing!")?;
                return Ok(Finish::Quit);
            }

            match parse_input(&line, &self.config) {
                Ok(Input::Move { row, col }) => {
                    if let Err(e) = self.board.apply_move(row, col) {
                        debug!(error = %e, "Move rejected");
                        writeln!(out, "Try again; error: {e}")?;
                    }
                }
                Ok(Input::Ai) => {
                    if let Err(e) = self.ai.play(&mut self.board) {
                        error!(error = %e, "AI asked to move with no legal moves");
                        writeln!(out, "AI should NEVER ERROR but: {e}")?;
                    }
                }
                Ok(Input::Quit) => {
                    info!("Player quit");
                    writeln!(out, "Thank you for playing!")?;
                    return Ok(Finish::Quit);
                }
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(out, "Try again; error: {e}")?;
                }
            }
        }
    }

    fn game_over<W: Write>(&self, outcome: Outcome, out: &mut W) -> io::Result<Finish> {
        info!(?outcome, moves = self.board.move_count(), "Game over");
        writeln!(out, "---GAME OVER---")?;
        Ok(Finish::GameOver(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_input("1,2", &config()),
            Ok(Input::Move { row: 1, col: 2 })
        );
        assert_eq!(
            parse_input("  0,0 \n", &config()),
            Ok(Input::Move { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("AI", &config()), Ok(Input::Ai));
        assert_eq!(parse_input("exit\n", &config()), Ok(Input::Quit));
        assert!(parse_input("ai", &config()).is_err());
    }

    #[test]
    fn test_parse_custom_commands() {
        let config = GameConfig::from_toml("ai_command = \"r\"\nquit_command = \"q\"").unwrap();
        assert_eq!(parse_input("r", &config), Ok(Input::Ai));
        assert_eq!(parse_input("q", &config), Ok(Input::Quit));
        assert!(parse_input("AI", &config).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "", "1", "1,", ",1", "1,2,0", "3,0", "0,3", "a,b", "1, 2", "-1,0", "+1,0", "1;2",
        ] {
            assert_eq!(
                parse_input(bad, &config()),
                Err(InputError::Malformed {
                    input: bad.trim().to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_display() {
        let err = parse_input("9,9", &config()).unwrap_err();
        assert_eq!(err.to_string(), "bad input: 9,9");
    }
}
