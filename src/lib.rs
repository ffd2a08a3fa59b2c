//! Noughts - tic-tac-toe front-ends
//!
//! Terminal front-ends for the [`noughts_core`] match engine.
//!
//! # Architecture
//!
//! - **Console**: line-based play over any reader/writer pair
//! - **TUI**: full-screen play with ratatui
//! - **Replay**: plays a fixed list of coordinates
//! - **Settings**: player names from TOML
//!
//! Every front-end is a [`noughts_core::PresentationAdapter`]; the controller
//! is constructed by the caller and handed in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod replay;
mod settings;
mod tui;

pub use console::{ConsoleAdapter, parse_coordinate};
pub use replay::{DEMO_MOVES, parse_moves, run_replay};
pub use settings::{MatchSettings, SettingsError};
pub use tui::{CrosstermKeys, KeySource, NextStep, TuiAdapter, run_tui};
