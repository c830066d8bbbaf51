//! Tac Toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use tac_toe::cli::{Cli, Command};
use tac_toe::{Console, GameConfig, RandomAi};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { seed } => run_play(config.with_seed(seed)),
        Command::Simulate { games, seed, json } => run_simulate(config.with_seed(seed), games, json),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut console = Console::new(config);
    let finish = console.run(io::stdin().lock(), io::stdout().lock())?;
    info!(?finish, "Session ended");
    Ok(())
}

/// Play random games and report the tallies
#[instrument(skip(config))]
fn run_simulate(config: GameConfig, games: Option<u64>, json: bool) -> Result<()> {
    let games = games.unwrap_or(*config.simulation_games());
    info!(games, "Starting simulation");

    let mut ai = RandomAi::from_seed(*config.seed());
    let stats = tac_toe::simulate(games, &mut ai)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
