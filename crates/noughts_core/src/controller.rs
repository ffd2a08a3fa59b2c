//! Turn sequencing and win detection for a match.

use crate::error::{GridError, SetupError};
use crate::grid::{Grid, GridSnapshot};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::outcome::{NoOpReason, TurnOutcome};
use crate::rules::{check_winner, is_draw};
use crate::types::{Mark, MatchState, MatchStatus, Placement, Player};
use crate::view::MatchView;
use tracing::{debug, info, instrument, warn};

/// Default name for the player who moves first.
pub const PLAYER_ONE: &str = "Player One";
/// Default name for the player who moves second.
pub const PLAYER_TWO: &str = "Player Two";

/// Owns the grid, both players and the match state.
///
/// All mutation goes through [`MatchController::play_turn`]. A match starts
/// in progress with the first player active and moves monotonically to a
/// won or drawn conclusion, after which no placement is accepted.
#[derive(Debug, Clone)]
pub struct MatchController {
    pub(crate) grid: Grid,
    pub(crate) players: [Player; 2],
    pub(crate) state: MatchState,
    pub(crate) history: Vec<Placement>,
}

impl MatchController {
    /// Creates a match between two players.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateMark`] if both players carry the same mark.
    #[instrument(skip_all, fields(one = %player_one.name(), two = %player_two.name()))]
    pub fn new(player_one: Player, player_two: Player) -> Result<Self, SetupError> {
        if player_one.mark() == player_two.mark() {
            return Err(SetupError::DuplicateMark(*player_one.mark()));
        }

        info!("Starting match");
        Ok(Self {
            grid: Grid::new(),
            players: [player_one, player_two],
            state: MatchState::new(),
            history: Vec::new(),
        })
    }

    /// Creates a match where the first name plays X and the second plays O.
    pub fn with_names(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            grid: Grid::new(),
            players: [
                Player::new(player_one, Mark::X),
                Player::new(player_two, Mark::O),
            ],
            state: MatchState::new(),
            history: Vec::new(),
        }
    }

    /// Plays one turn for the active player at `(column, row)`.
    ///
    /// The win condition is evaluated against the mark just placed before the
    /// turn passes to the other player.
    #[instrument(skip(self), fields(player = %self.active_player().name()))]
    pub fn play_turn(&mut self, column: usize, row: usize) -> TurnOutcome {
        if self.state.status().is_concluded() {
            debug!(status = ?self.state.status(), "Ignoring turn after conclusion");
            return TurnOutcome::NoOp(NoOpReason::MatchConcluded);
        }

        let mark = *self.active_player().mark();
        match self.grid.place(column, row, mark) {
            Err(GridError::InvalidCoordinate { .. }) => {
                warn!("Coordinate outside the grid");
                return TurnOutcome::InvalidCoordinate { column, row };
            }
            Ok(false) => {
                debug!("Cell occupied, turn not consumed");
                return TurnOutcome::NoOp(NoOpReason::CellOccupied);
            }
            Ok(true) => {}
        }
        self.history.push(Placement::new(column, row, mark));

        let mover = *self.state.active_player_index();
        let outcome = if check_winner(&self.grid) == Some(mark) {
            self.state.conclude(MatchStatus::Won(mover));
            info!(winner = %self.players[mover].name(), "Match won");
            TurnOutcome::Win(self.players[mover].clone())
        } else if is_draw(&self.grid) {
            self.state.conclude(MatchStatus::Draw);
            info!("Match drawn");
            TurnOutcome::Draw
        } else {
            self.state.switch_turn();
            TurnOutcome::Continue(self.active_player().clone())
        };

        debug_assert!(
            MatchInvariants::check_all(self).is_ok(),
            "match invariants violated after {:?}",
            outcome
        );
        outcome
    }

    /// Starts a new match with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting match");
        self.grid = Grid::new();
        self.state = MatchState::new();
        self.history.clear();
    }

    /// Returns the player whose turn it is.
    ///
    /// After a win this is the winner; after a draw, the player who filled the
    /// last cell.
    pub fn active_player(&self) -> &Player {
        &self.players[*self.state.active_player_index()]
    }

    /// Returns a read-only copy of the grid.
    pub fn board_snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Returns the turn pointer and status.
    pub fn status(&self) -> MatchState {
        self.state
    }

    /// Returns both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the winning player, if the match was won.
    pub fn winner(&self) -> Option<&Player> {
        self.state.status().winner().map(|i| &self.players[i])
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns every successful placement in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Bundles everything a front-end needs to render.
    pub fn view(&self) -> MatchView {
        MatchView::new(self.board_snapshot(), self.players.clone(), self.state)
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::with_names(PLAYER_ONE, PLAYER_TWO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_new_match() {
        let game = MatchController::default();
        assert_eq!(*game.status().status(), MatchStatus::InProgress);
        assert_eq!(*game.status().active_player_index(), 0);
        assert_eq!(game.active_player().name(), PLAYER_ONE);
        assert_eq!(*game.active_player().mark(), Mark::X);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_duplicate_marks_rejected() {
        let result = MatchController::new(Player::new("a", Mark::O), Player::new("b", Mark::O));
        assert_eq!(result.err(), Some(SetupError::DuplicateMark(Mark::O)));
    }

    #[test]
    fn test_custom_first_mark() {
        let mut game =
            MatchController::new(Player::new("a", Mark::O), Player::new("b", Mark::X)).unwrap();
        game.play_turn(0, 0);
        assert_eq!(game.board_snapshot().get(0, 0), Some(Cell::Marked(Mark::O)));
        assert_eq!(*game.active_player().mark(), Mark::X);
    }

    #[test]
    fn test_continue_switches_player() {
        let mut game = MatchController::default();
        let outcome = game.play_turn(1, 1);
        assert_eq!(outcome, TurnOutcome::Continue(game.players()[1].clone()));
        assert_eq!(game.active_player().name(), PLAYER_TWO);
        assert_eq!(game.history(), &[Placement::new(1, 1, Mark::X)]);
    }

    #[test]
    fn test_win_keeps_winner_active() {
        let mut game = MatchController::default();
        for (column, row) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            game.play_turn(column, row);
        }
        let outcome = game.play_turn(2, 0);

        assert_eq!(outcome, TurnOutcome::Win(game.players()[0].clone()));
        assert_eq!(*game.status().status(), MatchStatus::Won(0));
        assert_eq!(game.active_player().name(), PLAYER_ONE);
        assert_eq!(game.winner().map(|p| p.name().as_str()), Some(PLAYER_ONE));
    }

    #[test]
    fn test_restart_clears_match() {
        let mut game = MatchController::with_names("Ann", "Bob");
        game.play_turn(0, 0);
        game.play_turn(1, 0);
        game.restart();

        assert_eq!(game.board_snapshot(), Grid::new().snapshot());
        assert_eq!(game.status(), MatchState::new());
        assert_eq!(game.active_player().name(), "Ann");
        assert!(game.history().is_empty());
    }
}
