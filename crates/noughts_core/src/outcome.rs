//! Result of a single turn.

use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why a turn changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum NoOpReason {
    /// The targeted cell already holds a mark.
    #[display("That cell is already taken")]
    CellOccupied,
    /// The match has already been won or drawn.
    #[display("The match is already over")]
    MatchConcluded,
}

/// Tagged result of one `play_turn` call.
///
/// Only `Continue` consumes a turn without ending the match. `NoOp` and
/// `InvalidCoordinate` leave every piece of state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Placement succeeded; the contained player moves next.
    #[display("{}'s turn.", _0.name())]
    Continue(Player),
    /// Placement completed a line for the contained player.
    #[display("{} has won!", _0.name())]
    Win(Player),
    /// Placement filled the grid without a line.
    #[display("It's a draw!")]
    Draw,
    /// Nothing happened.
    #[display("{}", _0)]
    NoOp(NoOpReason),
    /// The coordinate lies outside the grid.
    #[display("({}, {}) is not on the board", column, row)]
    InvalidCoordinate {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
    },
}

impl TurnOutcome {
    /// Returns true if the turn placed a mark.
    pub fn placed(&self) -> bool {
        matches!(
            self,
            TurnOutcome::Continue(_) | TurnOutcome::Win(_) | TurnOutcome::Draw
        )
    }

    /// Returns true if the turn ended the match.
    pub fn concludes(&self) -> bool {
        matches!(self, TurnOutcome::Win(_) | TurnOutcome::Draw)
    }
}
