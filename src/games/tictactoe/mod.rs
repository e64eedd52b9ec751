//! Tic-tac-toe board state, rules, and invariants.

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use state::{BoardState, ParseBoardError};
pub use types::{Board, CELL_COUNT, GameStatus, Player, Square};

/// Alias for clarity in the game loop.
pub type Mark = Player;

/// Starts a game with the given human mark and first mover.
pub fn new_game(human: Player, first: Player) -> BoardState {
    BoardState::new_game(human, first)
}
