//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (created by hand; defaults apply if missing)
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Name of the first player (plays X)
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name of the second player (plays O)
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console, entering `column row` each turn
    Console,

    /// Play in a full-screen terminal UI
    Tui {
        /// File to write logs to (the screen is owned by the UI)
        #[arg(long, default_value = "noughts_tui.log")]
        log_file: PathBuf,
    },

    /// Replay a fixed list of moves and print the result
    Replay {
        /// Space-separated `column,row` pairs, e.g. "0,0 1,0 2,2"
        #[arg(short, long, default_value = noughts::DEMO_MOVES)]
        moves: String,

        /// Print the final board and history as JSON
        #[arg(long)]
        json: bool,
    },
}
