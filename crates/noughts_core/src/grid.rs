//! Fixed-size grid of write-once cells.

use crate::error::GridError;
use crate::types::{Cell, Coordinate, GRID_SIZE, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rectangular grid stored in row-major order.
///
/// Dimensions are fixed at construction. Every cell starts `Empty` and can be
/// written at most once through [`Grid::place`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty match grid (`GRID_SIZE` x `GRID_SIZE`).
    pub fn new() -> Self {
        Self::with_dimensions(GRID_SIZE, GRID_SIZE)
    }

    /// Creates an empty square grid of side `size`.
    pub fn square(size: usize) -> Self {
        Self::with_dimensions(size, size)
    }

    /// Creates an empty grid `columns` wide and `rows` tall.
    #[instrument]
    pub fn with_dimensions(columns: usize, rows: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns true when the grid is square, the only shape with diagonals.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then_some(row * self.columns + column)
    }

    /// Gets the cell at `(column, row)`, or `None` if out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.index(column, row).map(|i| self.cells[i])
    }

    /// Places `mark` at `(column, row)` if that cell is empty.
    ///
    /// Returns `Ok(true)` when the cell changed and `Ok(false)` when it was
    /// already occupied, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if the coordinate lies outside
    /// the grid.
    #[instrument(skip(self), fields(rows = self.rows, columns = self.columns))]
    pub fn place(&mut self, column: usize, row: usize, mark: Mark) -> Result<bool, GridError> {
        let Some(i) = self.index(column, row) else {
            return Err(GridError::InvalidCoordinate {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            });
        };

        if !self.cells[i].is_empty() {
            debug!(occupant = ?self.cells[i], "Cell already occupied");
            return Ok(false);
        }

        self.cells[i] = Cell::Marked(mark);
        Ok(true)
    }

    /// Returns true once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Coordinate::new(i % self.columns, i / self.columns))
            .collect()
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Returns a read-only copy of the cell values.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cells: self
                .cells
                .chunks(self.columns.max(1))
                .map(<[Cell]>::to_vec)
                .collect(),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only, row-major view of a grid's cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    cells: Vec<Vec<Cell>>,
}

impl GridSnapshot {
    /// Rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Gets the cell at `(column, row)`.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Formats the snapshot as a human-readable board.
    pub fn display(&self) -> String {
        let width = self.cells.first().map_or(0, Vec::len);
        let divider = vec!["-"; width].join("+");
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Cell::Empty => ".".to_string(),
                        Cell::Marked(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", divider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        for size in 1..=5 {
            let grid = Grid::square(size);
            for row in 0..size {
                for column in 0..size {
                    assert_eq!(grid.get(column, row), Some(Cell::Empty));
                }
            }
            assert!(!grid.is_full());
        }
    }

    #[test]
    fn test_place_on_empty_cell() {
        let mut grid = Grid::new();
        assert_eq!(grid.place(2, 0, Mark::X), Ok(true));
        assert_eq!(grid.get(2, 0), Some(Cell::Marked(Mark::X)));
        assert_eq!(grid.get(0, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_place_on_occupied_cell_is_noop() {
        let mut grid = Grid::new();
        grid.place(1, 1, Mark::X).unwrap();
        let before = grid.clone();

        assert_eq!(grid.place(1, 1, Mark::O), Ok(false));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut grid = Grid::new();
        let before = grid.clone();

        assert!(matches!(
            grid.place(3, 0, Mark::X),
            Err(GridError::InvalidCoordinate { column: 3, row: 0, .. })
        ));
        assert!(grid.place(0, 3, Mark::X).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rectangular_bounds() {
        let mut grid = Grid::with_dimensions(4, 2);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.place(3, 1, Mark::O), Ok(true));
        assert!(grid.place(1, 2, Mark::O).is_err());
        assert!(!grid.is_square());
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::square(2);
        for coord in grid.empty_cells() {
            grid.place(coord.column, coord.row, Mark::O).unwrap();
        }
        assert!(grid.is_full());
        assert!(grid.empty_cells().is_empty());
        assert_eq!(grid.count(Mark::O), 4);
    }

    #[test]
    fn test_snapshot_is_row_major() {
        let mut grid = Grid::new();
        grid.place(2, 1, Mark::O).unwrap();
        let snapshot = grid.snapshot();

        assert_eq!(snapshot.rows().len(), 3);
        assert_eq!(snapshot.rows()[1][2], Cell::Marked(Mark::O));
        assert_eq!(snapshot.get(2, 1), Some(Cell::Marked(Mark::O)));
        assert_eq!(snapshot.get(3, 1), None);
    }

    #[test]
    fn test_snapshot_display() {
        let mut grid = Grid::new();
        grid.place(0, 0, Mark::X).unwrap();
        grid.place(1, 1, Mark::O).unwrap();
        assert_eq!(grid.snapshot().display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
