//! Read-only match view handed to front-ends.

use crate::grid::GridSnapshot;
use crate::types::{MatchState, MatchStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to draw a match, detached from the controller.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct MatchView {
    /// Cell values, row-major.
    snapshot: GridSnapshot,
    /// Both players, first mover first.
    players: [Player; 2],
    /// Turn pointer and status.
    state: MatchState,
}

impl MatchView {
    /// The player whose turn it is.
    pub fn active_player(&self) -> &Player {
        &self.players[*self.state.active_player_index()]
    }

    /// The winner, if the match was won.
    pub fn winner(&self) -> Option<&Player> {
        self.state.status().winner().map(|i| &self.players[i])
    }

    /// Headline for the current state, e.g. "Player One's turn...".
    pub fn headline(&self) -> String {
        match self.state.status() {
            MatchStatus::InProgress => format!("{}'s turn...", self.active_player().name()),
            MatchStatus::Won(i) => format!("{} has won!", self.players[*i].name()),
            MatchStatus::Draw => "It's a draw!".to_string(),
        }
    }
}
