//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every turn. The
//! controller checks them in debug builds and they can be tested on their own.

use crate::controller::MatchController;
use crate::rules::{check_winner, is_draw};
use crate::types::{Cell, MatchStatus};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// Players alternate, starting with the first player's mark, and the turn
/// pointer agrees with the history while the match is running.
///
/// On the grid the first mark is never behind the second, and never more
/// than one ahead.
pub struct AlternatingTurn;

impl Invariant<MatchController> for AlternatingTurn {
    fn holds(game: &MatchController) -> bool {
        let marks = [*game.players()[0].mark(), *game.players()[1].mark()];
        let history = game.history();

        let first = game.grid().count(marks[0]);
        let second = game.grid().count(marks[1]);
        let balanced = first == second || first == second + 1;

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, p)| p.mark == marks[i % 2]);

        let pointer_ok = match game.status().status() {
            MatchStatus::InProgress => *game.status().active_player_index() == history.len() % 2,
            MatchStatus::Won(_) | MatchStatus::Draw => {
                !history.is_empty()
                    && *game.status().active_player_index() == (history.len() - 1) % 2
            }
        };

        balanced && alternates && pointer_ok
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}

/// Every recorded placement is on the grid and nothing else is.
pub struct HistoryConsistent;

impl Invariant<MatchController> for HistoryConsistent {
    fn holds(game: &MatchController) -> bool {
        let grid = game.grid();
        let marked = grid.rows() * grid.columns() - grid.empty_cells().len();

        marked == game.history().len()
            && game
                .history()
                .iter()
                .all(|p| grid.get(p.column, p.row) == Some(Cell::Marked(p.mark)))
    }

    fn description() -> &'static str {
        "Grid contents match the placement history"
    }
}

/// The status agrees with what the grid shows.
pub struct StatusConsistent;

impl Invariant<MatchController> for StatusConsistent {
    fn holds(game: &MatchController) -> bool {
        let grid = game.grid();
        match game.status().status() {
            MatchStatus::InProgress => check_winner(grid).is_none() && !grid.is_full(),
            MatchStatus::Won(i) => check_winner(grid) == Some(*game.players()[*i].mark()),
            MatchStatus::Draw => is_draw(grid),
        }
    }

    fn description() -> &'static str {
        "Status reflects the grid (no unreported line, no premature conclusion)"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (AlternatingTurn, HistoryConsistent, StatusConsistent);
