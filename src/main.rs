//! Noughts - unified CLI
//!
//! Two-player tic-tac-toe with console, full-screen and replay front-ends.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{ConsoleAdapter, MatchSettings, parse_moves, run_replay, run_tui};
use noughts_core::play_match;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { ref log_file } => initialize_file_tracing(log_file)?,
        Command::Console | Command::Replay { .. } => initialize_tracing(),
    }

    let settings = MatchSettings::load_or_default(&cli.config)?
        .with_overrides(cli.player_one.clone(), cli.player_two.clone())?;
    info!(
        player_one = %settings.player_one(),
        player_two = %settings.player_two(),
        "Players ready"
    );

    match cli.command {
        Command::Console => run_console(&settings),
        Command::Tui { .. } => run_tui(settings.controller()),
        Command::Replay { moves, json } => run_replay_command(&settings, &moves, json),
    }
}

/// Run a match on stdin/stdout
#[instrument(skip_all)]
fn run_console(settings: &MatchSettings) -> Result<()> {
    let mut controller = settings.controller();
    let mut adapter = ConsoleAdapter::stdio();
    let status = play_match(&mut controller, &mut adapter).context("Console I/O failed")?;
    info!(?status, "Console match ended");
    Ok(())
}

/// Replay moves given on the command line
#[instrument(skip(settings))]
fn run_replay_command(settings: &MatchSettings, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let mut controller = settings.controller();
    let mut stdout = std::io::stdout().lock();
    run_replay(&mut controller, moves, &mut stdout, json)?;
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to stderr so they do not mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs to a file to avoid interfering with the TUI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
