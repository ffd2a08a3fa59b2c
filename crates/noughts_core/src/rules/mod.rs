//! Match rules.
//!
//! Pure functions for evaluating a grid. Rules are kept apart from grid
//! storage so the controller, the invariants and tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, has_winning_line, lines};
