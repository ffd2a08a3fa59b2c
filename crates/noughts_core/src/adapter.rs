//! Boundary between the match core and whatever draws it.

use crate::controller::MatchController;
use crate::outcome::TurnOutcome;
use crate::types::{Coordinate, MatchStatus};
use crate::view::MatchView;
use std::collections::VecDeque;
use std::convert::Infallible;
use tracing::{debug, info, instrument};

/// A front-end that renders match views and supplies coordinates.
///
/// Adapters never own game state. They receive a fresh [`MatchView`] before
/// every input request and hear about each [`TurnOutcome`].
pub trait PresentationAdapter {
    /// Error raised by the adapter's own I/O.
    type Error;

    /// Draws the current state of the match.
    fn render(&mut self, view: &MatchView) -> Result<(), Self::Error>;

    /// Asks for the next coordinate. `None` means the user quit.
    fn next_move(&mut self, view: &MatchView) -> Result<Option<Coordinate>, Self::Error>;

    /// Reports the outcome of the last turn.
    fn announce(&mut self, _outcome: &TurnOutcome) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Drives a match to its conclusion, or until the adapter stops supplying moves.
///
/// Returns the status the match was left in.
///
/// # Errors
///
/// Propagates any error raised by the adapter.
#[instrument(skip_all)]
pub fn play_match<A: PresentationAdapter>(
    controller: &mut MatchController,
    adapter: &mut A,
) -> Result<MatchStatus, A::Error> {
    loop {
        let view = controller.view();
        adapter.render(&view)?;

        if view.state().status().is_concluded() {
            info!(status = ?view.state().status(), "Match finished");
            return Ok(*view.state().status());
        }

        let Some(coord) = adapter.next_move(&view)? else {
            info!("Adapter ended the match early");
            return Ok(*view.state().status());
        };

        let outcome = controller.play_turn(coord.column, coord.row);
        if outcome.concludes() {
            info!(%outcome, moves = controller.history().len(), "Final placement");
        } else if !outcome.placed() {
            debug!(?coord, %outcome, "Turn rejected");
        } else {
            debug!(?coord, ?outcome, "Turn played");
        }
        adapter.announce(&outcome)?;
    }
}

/// Adapter that replays a fixed list of coordinates and records what happened.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAdapter {
    moves: VecDeque<Coordinate>,
    outcomes: Vec<TurnOutcome>,
    renders: usize,
}

impl ScriptedAdapter {
    /// Creates an adapter that will play `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            outcomes: Vec::new(),
            renders: 0,
        }
    }

    /// Outcomes reported so far, one per move played.
    pub fn outcomes(&self) -> &[TurnOutcome] {
        &self.outcomes
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Number of times the match was rendered.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl PresentationAdapter for ScriptedAdapter {
    type Error = Infallible;

    fn render(&mut self, _view: &MatchView) -> Result<(), Self::Error> {
        self.renders += 1;
        Ok(())
    }

    fn next_move(&mut self, _view: &MatchView) -> Result<Option<Coordinate>, Self::Error> {
        Ok(self.moves.pop_front())
    }

    fn announce(&mut self, outcome: &TurnOutcome) -> Result<(), Self::Error> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
