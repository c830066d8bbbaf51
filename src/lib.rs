//! Tac Toe library - text tic-tac-toe
//!
//! A 3x3 board with move validation, win/tie detection and a uniform random
//! AI, plus the console loop and simulator built on it.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe [`Board`], its rules, and [`RandomAi`]
//! - **Console**: line-based interactive loop over any reader/writer
//! - **Simulate**: random self-play statistics
//! - **Config**: TOML settings for commands, prompt and seed
//!
//! # Example
//!
//! ```
//! use tac_toe::{Board, Outcome, Player};
//!
//! let mut board = Board::new();
//! board.apply_move(1, 1)?;
//! assert_eq!(board.to_move(), Player::O);
//! assert_eq!(board.winner(), Outcome::Ongoing);
//! # Ok::<(), tac_toe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Module declarations
pub mod cli;
pub mod config;
pub mod console;
mod games;
pub mod simulate;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, Move, MoveError, Outcome, Player, Position, RandomAi, Square, rules,
};

// Crate-level exports - Console
pub use console::{Console, Finish, Input, InputError, parse_input};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Simulation
pub use simulate::{SimulationStats, play_random_game, simulate};
