//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe
//! rules, kept apart from the mutable game state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_won};
