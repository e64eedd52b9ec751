//! Unbeatable tic-tac-toe.
//!
//! A human plays against a computer opponent that searches the whole
//! game tree with minimax and alpha-beta pruning.
//!
//! # Architecture
//!
//! - **Games**: board state, rules, and invariants
//! - **Engine**: move selection for the AI side
//! - **Play**: console agents and the turn loop
//! - **Config**: TOML game settings
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{BoardState, Player, find_best_move};
//!
//! // Human X has two in a row; the AI (O) must block at index 2.
//! let state = BoardState::from_cells_str("XX.......", Player::O, Player::X).unwrap();
//! assert_eq!(find_best_move(&state), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod games;
mod play;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Search engine
pub use engine::{
    AI_WIN, DRAW, HUMAN_WIN, Minimax, SearchResult, SearchStats, find_best_move, minimax,
    terminal_value,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardState, CELL_COUNT, GameStatus, Mark, Move, MoveError, ParseBoardError, Player,
    Position, Square, invariants, new_game, rules,
};

// Crate-level exports - Console play
pub use play::{
    Agent, HumanAgent, MinimaxAgent, Orchestrator, analyze_position, play_interactive, self_play,
};
