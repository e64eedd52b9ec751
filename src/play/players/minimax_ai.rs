//! Computer player backed by the minimax engine.

use super::Agent;
use crate::engine::{Minimax, SearchStats};
use crate::games::tictactoe::{BoardState, Mark};
use anyhow::{Result, anyhow};
use tracing::{debug, instrument};

/// Unbeatable AI playing `mark`.
pub struct MinimaxAgent {
    name: String,
    mark: Mark,
    searcher: Minimax,
    show_stats: bool,
    last_stats: Option<SearchStats>,
}

impl MinimaxAgent {
    /// Creates a new minimax agent for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            searcher: Minimax::new(),
            show_stats: false,
            last_stats: None,
        }
    }

    /// Reports search statistics after each move.
    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    /// Statistics of the last search, if any.
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

impl Agent for MinimaxAgent {
    #[instrument(skip(self, state), fields(ai = %self.name, mark = %self.mark))]
    fn choose_move(&mut self, state: &BoardState) -> Result<usize> {
        let view = state.with_ai_role(self.mark);
        let result = self
            .searcher
            .search(&view)
            .ok_or_else(|| anyhow!("No empty cell left for {}", self.name))?;
        debug!(
            index = result.index,
            value = result.value,
            "AI chose position"
        );
        self.last_stats = Some(result.stats);
        Ok(result.index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn thinking_message(&self) -> Option<&str> {
        Some("AI is making a move...")
    }

    fn after_move_note(&self) -> Option<String> {
        if !self.show_stats {
            return None;
        }
        self.last_stats
            .map(|stats| format!("{} searched {}", self.name, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_blocks_as_x() {
        // O threatens the bottom row; every move except 6 loses at once.
        let state = BoardState::from_cells_str("X...X..OO", Player::X, Player::O).unwrap();
        let mut ai = MinimaxAgent::new("AI", Player::X);
        assert_eq!(ai.choose_move(&state).unwrap(), 6);
    }

    #[test]
    fn test_reports_stats_when_enabled() {
        let mut ai = MinimaxAgent::new("AI", Player::O).with_stats(true);
        assert!(ai.after_move_note().is_none());
        ai.choose_move(&BoardState::new()).unwrap();
        assert!(ai.last_stats().is_some());
        assert!(ai.after_move_note().unwrap().contains("nodes"));
    }

    #[test]
    fn test_full_board_is_error() {
        let state = BoardState::from_cells_str("XOXXOOOXX", Player::O, Player::X).unwrap();
        let mut ai = MinimaxAgent::new("AI", Player::O);
        assert!(ai.choose_move(&state).is_err());
    }
}
