//! Agent trait and implementations.

mod human;
mod minimax_ai;

pub use human::HumanAgent;
pub use minimax_ai::MinimaxAgent;

use crate::games::tictactoe::BoardState;
use anyhow::Result;

/// Anything that can pick moves for one side of the board.
pub trait Agent {
    /// Gets a move from this agent.
    ///
    /// Returns the board index (0-8) for the next move.
    fn choose_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;

    /// Line shown before the agent is asked for a move.
    fn thinking_message(&self) -> Option<&str> {
        None
    }

    /// Line shown after the agent's move was applied.
    fn after_move_note(&self) -> Option<String> {
        None
    }
}
