//! Move selection for the computer player.
//!
//! The engine searches the full game tree with minimax and alpha-beta
//! pruning. Terminal positions score +1 for an AI win, -1 for a human
//! win and 0 for a draw; there is no heuristic evaluation.

mod minimax;
mod stats;

pub use minimax::{
    AI_WIN, DRAW, HUMAN_WIN, Minimax, SearchResult, find_best_move, minimax, terminal_value,
};
pub use stats::SearchStats;
