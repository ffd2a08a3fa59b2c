//! Core domain types for a match.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Side length of the grid a match is played on.
pub const GRID_SIZE: usize = 3;

/// Token identifying which player occupies a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Mark X (moves first by default).
    X,
    /// Mark O.
    O,
}

/// A single cell of the grid.
///
/// Cells are write-once: an `Empty` cell may become `Marked`, after which it
/// never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(mark) => write!(f, "{}", mark),
        }
    }
}

/// A participant in a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark this player places.
    mark: Mark,
}

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Turns are still being played.
    InProgress,
    /// The player at this index completed a line.
    Won(usize),
    /// The grid filled without a line.
    Draw,
}

impl MatchStatus {
    /// Returns true once the match has been won or drawn.
    pub fn is_concluded(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    /// Returns the winning player's index, if any.
    pub fn winner(self) -> Option<usize> {
        match self {
            MatchStatus::Won(index) => Some(index),
            MatchStatus::InProgress | MatchStatus::Draw => None,
        }
    }
}

/// Turn pointer plus status, as reported by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MatchState {
    /// Index (0 or 1) of the player whose turn it is.
    active_player_index: usize,
    /// Whether the match is running, won or drawn.
    status: MatchStatus,
}

impl MatchState {
    /// Initial state: player one to move, match in progress.
    pub fn new() -> Self {
        Self {
            active_player_index: 0,
            status: MatchStatus::InProgress,
        }
    }

    pub(crate) fn switch_turn(&mut self) {
        self.active_player_index = 1 - self.active_player_index;
    }

    pub(crate) fn conclude(&mut self, status: MatchStatus) {
        debug_assert!(!self.status.is_concluded(), "status never reverses");
        self.status = status;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful placement, recorded in the match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Column of the placed mark.
    pub column: usize,
    /// Row of the placed mark.
    pub row: usize,
    /// The mark placed.
    pub mark: Mark,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.column, self.row)
    }
}

/// A cell address as entered by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Coordinate {
    /// Zero-based column, left to right.
    pub column: usize,
    /// Zero-based row, top to bottom.
    pub row: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Cell::Marked(Mark::O).to_string(), "O");
        assert_eq!(Cell::Empty.to_string(), " ");
    }

    #[test]
    fn test_initial_state() {
        let state = MatchState::new();
        assert_eq!(*state.active_player_index(), 0);
        assert_eq!(*state.status(), MatchStatus::InProgress);
        assert!(!state.status().is_concluded());
    }

    #[test]
    fn test_switch_turn_alternates() {
        let mut state = MatchState::new();
        state.switch_turn();
        assert_eq!(*state.active_player_index(), 1);
        state.switch_turn();
        assert_eq!(*state.active_player_index(), 0);
    }
}
