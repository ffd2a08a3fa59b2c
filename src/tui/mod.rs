//! Terminal UI front-end.

mod adapter;
mod input;
mod ui;

pub use adapter::{CrosstermKeys, KeySource, NextStep, TuiAdapter};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::{MatchController, play_match};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Restores the terminal when dropped, even on early return.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            error!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs matches in the terminal until the user quits.
#[instrument(skip_all)]
pub fn run_tui(mut controller: MatchController) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut adapter = TuiAdapter::new(terminal, CrosstermKeys);

    loop {
        let status = play_match(&mut controller, &mut adapter)?;

        let step = if status.is_concluded() {
            adapter.await_next_step(&controller.view())?
        } else {
            adapter.next_step()
        };

        match step {
            NextStep::Restart => controller.restart(),
            NextStep::Quit => break,
        }
    }

    adapter.terminal_mut().show_cursor()?;
    info!("Terminal UI closed");
    Ok(())
}
