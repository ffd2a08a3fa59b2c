//! Pure tic-tac-toe match logic.
//!
//! # Architecture
//!
//! - **Grid**: fixed-size, write-once cells
//! - **Rules**: win and draw evaluation over a grid
//! - **MatchController**: turn sequencing and match status
//! - **PresentationAdapter**: the seam front-ends plug into
//!
//! # Example
//!
//! ```
//! use noughts_core::{MatchController, MatchStatus, TurnOutcome};
//!
//! let mut game = MatchController::default();
//! for (column, row) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
//!     game.play_turn(column, row);
//! }
//! assert!(matches!(game.play_turn(2, 0), TurnOutcome::Win(_)));
//! assert_eq!(*game.status().status(), MatchStatus::Won(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod controller;
mod error;
mod grid;
mod invariants;
mod outcome;
pub mod rules;
mod types;
mod view;

pub use adapter::{PresentationAdapter, ScriptedAdapter, play_match};
pub use controller::{MatchController, PLAYER_ONE, PLAYER_TWO};
pub use error::{GridError, SetupError};
pub use grid::{Grid, GridSnapshot};
pub use invariants::{
    AlternatingTurn, HistoryConsistent, Invariant, InvariantSet, InvariantViolation,
    MatchInvariants, StatusConsistent,
};
pub use outcome::{NoOpReason, TurnOutcome};
pub use types::{Cell, Coordinate, GRID_SIZE, Mark, MatchState, MatchStatus, Placement, Player};
pub use view::MatchView;
