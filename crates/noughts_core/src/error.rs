//! Error types for grid mutation and match setup.

use crate::types::Mark;
use derive_more::{Display, Error};

/// Errors raised by grid mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Column or row lies outside the grid.
    #[display("Coordinate ({}, {}) is outside the {}x{} grid", column, row, columns, rows)]
    InvalidCoordinate {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
        /// Grid width.
        columns: usize,
        /// Grid height.
        rows: usize,
    },
}

/// Errors raised while setting up a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Both players were given the same mark.
    #[display("Both players cannot play {}", _0)]
    DuplicateMark(#[error(not(source))] Mark),
}
