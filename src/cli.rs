//! Command-line interface for tac_toe.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};

/// Tac Toe - text tic-tac-toe with a uniform random AI
#[derive(Parser, Debug)]
#[command(name = "tac_toe")]
#[command(about = "Text tic-tac-toe with a random AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Seed for the random AI (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play random-vs-random games and print outcome statistics
    Simulate {
        /// Number of games, at least 1 (overrides the config file)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        games: Option<u64>,

        /// Seed for the random AI (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { seed: None }
    }
}
