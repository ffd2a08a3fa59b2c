//! Keyboard navigation over the grid.

use crossterm::event::KeyCode;
use noughts_core::Coordinate;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode, size: usize) -> Coordinate {
    let last = size.saturating_sub(1);
    let Coordinate { column, row } = cursor;

    match key {
        KeyCode::Left => Coordinate::new(column.saturating_sub(1), row),
        KeyCode::Right => Coordinate::new((column + 1).min(last), row),
        KeyCode::Up => Coordinate::new(column, row.saturating_sub(1)),
        KeyCode::Down => Coordinate::new(column, (row + 1).min(last)),
        _ => cursor,
    }
}

/// Maps keypad-style digits (1 top-left through 9 bottom-right) to cells.
pub fn digit_to_coordinate(c: char, size: usize) -> Option<Coordinate> {
    let digit = c.to_digit(10)? as usize;
    (1..=size * size)
        .contains(&digit)
        .then(|| Coordinate::new((digit - 1) % size, (digit - 1) / size))
}
