//! Draw detection.

use super::win::has_winning_line;
use crate::grid::Grid;
use tracing::instrument;

/// Returns true if the grid is full and no line is complete.
///
/// The controller only asks this after a successful placement; a draw is
/// never discovered by polling.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full() && !has_winning_line(grid)
}
