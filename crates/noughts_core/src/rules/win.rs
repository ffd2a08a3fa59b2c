//! Win detection over an N x N grid.

use crate::grid::Grid;
use crate::types::{Cell, Coordinate, Mark};
use tracing::instrument;

/// Candidate lines of a square grid of side `size`, in scan order.
///
/// Rows come first (top to bottom), then columns (left to right), then the
/// main diagonal and finally the anti-diagonal: `2 * size + 2` lines in all.
pub fn lines(size: usize) -> Vec<Vec<Coordinate>> {
    let rows = (0..size).map(|row| {
        (0..size)
            .map(|column| Coordinate::new(column, row))
            .collect::<Vec<_>>()
    });
    let columns = (0..size).map(|column| {
        (0..size)
            .map(|row| Coordinate::new(column, row))
            .collect::<Vec<_>>()
    });
    let main: Vec<Coordinate> = (0..size).map(|i| Coordinate::new(i, i)).collect();
    let anti: Vec<Coordinate> = (0..size).map(|i| Coordinate::new(size - 1 - i, i)).collect();

    rows.chain(columns).chain([main, anti]).collect()
}

/// Returns the mark owning the first complete line, if any.
///
/// A line is complete when every one of its cells is marked and all marks
/// agree. Grids that are not square have no winner.
#[instrument(skip(grid), fields(rows = grid.rows(), columns = grid.columns()))]
pub fn check_winner(grid: &Grid) -> Option<Mark> {
    if !grid.is_square() || grid.rows() == 0 {
        return None;
    }

    lines(grid.rows()).iter().find_map(|line| line_owner(grid, line))
}

/// Returns true if any line is complete.
pub fn has_winning_line(grid: &Grid) -> bool {
    check_winner(grid).is_some()
}

fn line_owner(grid: &Grid, line: &[Coordinate]) -> Option<Mark> {
    let first = grid.get(line[0].column, line[0].row)?.mark()?;
    line[1..]
        .iter()
        .all(|c| grid.get(c.column, c.row) == Some(Cell::Marked(first)))
        .then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, marks: &[(usize, usize, Mark)]) -> Grid {
        let mut grid = Grid::square(size);
        for &(column, row, mark) in marks {
            grid.place(column, row, mark).unwrap();
        }
        grid
    }

    #[test]
    fn test_line_count_and_order() {
        let lines = lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0][2], Coordinate::new(2, 0));
        assert_eq!(lines[3][2], Coordinate::new(0, 2));
        assert_eq!(
            lines[6],
            vec![Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(2, 2)]
        );
        assert_eq!(
            lines[7],
            vec![Coordinate::new(2, 0), Coordinate::new(1, 1), Coordinate::new(0, 2)]
        );
        assert_eq!(super::lines(4).len(), 10);
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid_with(3, &[(0, 0, Mark::X), (1, 0, Mark::X), (2, 0, Mark::X)]);
        assert_eq!(check_winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let grid = grid_with(3, &[(1, 0, Mark::O), (1, 1, Mark::O), (1, 2, Mark::O)]);
        assert_eq!(check_winner(&grid), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonals() {
        let main = grid_with(3, &[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)]);
        assert_eq!(check_winner(&main), Some(Mark::O));

        let anti = grid_with(3, &[(2, 0, Mark::X), (1, 1, Mark::X), (0, 2, Mark::X)]);
        assert_eq!(check_winner(&anti), Some(Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(3, &[(0, 0, Mark::X), (1, 0, Mark::O), (2, 0, Mark::X)]);
        assert!(!has_winning_line(&grid));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = grid_with(3, &[(0, 0, Mark::X), (1, 0, Mark::X)]);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_larger_grid_needs_full_line() {
        let three = grid_with(4, &[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)]);
        assert_eq!(check_winner(&three), None);

        let four = grid_with(
            4,
            &[(0, 3, Mark::O), (1, 3, Mark::O), (2, 3, Mark::O), (3, 3, Mark::O)],
        );
        assert_eq!(check_winner(&four), Some(Mark::O));
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid_with(1, &[(0, 0, Mark::X)]);
        assert_eq!(check_winner(&grid), Some(Mark::X));
    }
}
