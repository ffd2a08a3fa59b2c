//! Full-screen terminal front-end.

use super::input::{digit_to_coordinate, move_cursor};
use super::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use noughts_core::{Coordinate, MatchView, PresentationAdapter, TurnOutcome};
use ratatui::{Terminal, backend::Backend};
use std::io;
use tracing::{debug, info, instrument};

/// What the user asked for once a match stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Start a new match with the same players.
    Restart,
    /// Leave the program.
    Quit,
}

/// Where key presses come from.
pub trait KeySource {
    /// Blocks until a key is pressed.
    fn next_key(&mut self) -> io::Result<KeyCode>;
}

/// Reads key presses from the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyCode> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key.code);
            }
        }
    }
}

/// Renders with ratatui and reads keys from a [`KeySource`].
pub struct TuiAdapter<B: Backend, K> {
    terminal: Terminal<B>,
    keys: K,
    cursor: Coordinate,
    message: String,
    next_step: NextStep,
}

impl<B, K> TuiAdapter<B, K>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    K: KeySource,
{
    /// Wraps an already-initialised terminal.
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self {
            terminal,
            keys,
            cursor: Coordinate::new(1, 1),
            message: String::new(),
            next_step: NextStep::Quit,
        }
    }

    /// Returns the terminal so it can be restored.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Why the last match loop stopped.
    pub fn next_step(&self) -> NextStep {
        self.next_step
    }

    /// Shows the final board until the user chooses to restart or quit.
    #[instrument(skip_all)]
    pub fn await_next_step(&mut self, view: &MatchView) -> io::Result<NextStep> {
        self.render(view)?;
        loop {
            match self.keys.next_key()? {
                KeyCode::Char('r') => return Ok(self.reset(NextStep::Restart)),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(NextStep::Quit),
                _ => {}
            }
        }
    }

    fn reset(&mut self, step: NextStep) -> NextStep {
        self.message.clear();
        self.cursor = Coordinate::new(1, 1);
        self.next_step = step;
        step
    }
}

impl<B, K> PresentationAdapter for TuiAdapter<B, K>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    K: KeySource,
{
    type Error = io::Error;

    fn render(&mut self, view: &MatchView) -> Result<(), Self::Error> {
        let cursor = self.cursor;
        let message = self.message.as_str();
        self.terminal
            .draw(|f| ui::draw(f, view, cursor, message))
            .map_err(io::Error::other)?;
        Ok(())
    }

    fn next_move(&mut self, view: &MatchView) -> Result<Option<Coordinate>, Self::Error> {
        let size = view.snapshot().rows().len();
        loop {
            let key = self.keys.next_key()?;
            debug!(?key, "Key pressed");
            match key {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    self.next_step = NextStep::Quit;
                    return Ok(None);
                }
                KeyCode::Char('r') => {
                    info!("User restarted mid-match");
                    self.reset(NextStep::Restart);
                    return Ok(None);
                }
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(Some(self.cursor)),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(coord) = digit_to_coordinate(c, size) {
                        self.cursor = coord;
                        return Ok(Some(coord));
                    }
                }
                other => {
                    self.cursor = move_cursor(self.cursor, other, size);
                    self.render(view)?;
                }
            }
        }
    }

    fn announce(&mut self, outcome: &TurnOutcome) -> Result<(), Self::Error> {
        self.message = if outcome.placed() {
            String::new()
        } else {
            outcome.to_string()
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Mark, MatchController, MatchStatus, Placement, play_match};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    impl KeySource for VecDeque<KeyCode> {
        fn next_key(&mut self) -> io::Result<KeyCode> {
            self.pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }
    }

    fn adapter(keys: &[KeyCode]) -> TuiAdapter<TestBackend, VecDeque<KeyCode>> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TuiAdapter::new(terminal, keys.iter().copied().collect())
    }

    #[test]
    fn test_digits_play_to_win_then_restart() {
        let mut game = MatchController::default();
        let digits = ['1', '4', '2', '5', '3', 'r'].map(KeyCode::Char);
        let mut tui = adapter(&digits);

        let status = play_match(&mut game, &mut tui).unwrap();
        assert_eq!(status, MatchStatus::Won(0));
        assert_eq!(tui.cursor, Coordinate::new(2, 0));

        assert_eq!(tui.await_next_step(&game.view()).unwrap(), NextStep::Restart);
        assert_eq!(tui.next_step(), NextStep::Restart);
        assert_eq!(tui.cursor, Coordinate::new(1, 1));
    }

    #[test]
    fn test_arrows_and_enter_place_then_quit() {
        let mut game = MatchController::default();
        let mut tui = adapter(&[KeyCode::Right, KeyCode::Enter, KeyCode::Char('q')]);

        let status = play_match(&mut game, &mut tui).unwrap();

        assert_eq!(status, MatchStatus::InProgress);
        assert_eq!(game.history(), &[Placement::new(2, 1, Mark::X)]);
        assert_eq!(tui.next_step(), NextStep::Quit);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut game = MatchController::default();
        let mut tui = adapter(&[KeyCode::Char('5'), KeyCode::Enter, KeyCode::Esc]);

        play_match(&mut game, &mut tui).unwrap();

        assert_eq!(tui.message, "That cell is already taken");
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_restart_mid_match() {
        let mut game = MatchController::default();
        let mut tui = adapter(&[KeyCode::Char('9'), KeyCode::Char('r')]);

        let status = play_match(&mut game, &mut tui).unwrap();

        assert_eq!(status, MatchStatus::InProgress);
        assert_eq!(tui.next_step(), NextStep::Restart);
        assert_eq!(tui.cursor, Coordinate::new(1, 1));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let mut game = MatchController::default();
        let mut tui = adapter(&[]);

        let err = play_match(&mut game, &mut tui).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
