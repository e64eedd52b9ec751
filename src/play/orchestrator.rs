//! Game orchestration between two agents.

use super::players::Agent;
use crate::games::tictactoe::invariants::{InvariantSet, TicTacToeInvariants};
use crate::games::tictactoe::{BoardState, GameStatus, Mark, Move, Position};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs the turn loop, printing the board before every move.
pub struct Orchestrator<W> {
    state: BoardState,
    player_x: Box<dyn Agent>,
    player_o: Box<dyn Agent>,
    out: W,
    history: Vec<Move>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(
        state: BoardState,
        player_x: Box<dyn Agent>,
        player_o: Box<dyn Agent>,
        out: W,
    ) -> Self {
        Self {
            state,
            player_x,
            player_o,
            out,
            history: Vec::new(),
        }
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Runs the game loop until a win or a draw.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");

        loop {
            debug_assert!(
                TicTacToeInvariants::check_all(&self.state).is_ok(),
                "Reachable-state invariant violated"
            );

            writeln!(self.out, "{}\n", self.state.board().display())?;

            let status = self.state.status();
            if status.is_over() {
                info!(?status, moves = self.history.len(), "Game over");
                return Ok(status);
            }

            let mark = self.state.current_player();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if let Some(message) = player.thinking_message() {
                writeln!(self.out, "{}", message)?;
            }

            debug!(player = %player.name(), %mark, "Waiting for move");
            let index = player
                .choose_move(&self.state)
                .with_context(|| format!("{} failed to choose a move", player.name()))?;

            self.state
                .apply_move(index)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;

            if let Some(position) = Position::from_index(index) {
                self.history.push(Move::new(mark, position));
            }

            if let Some(note) = player.after_move_note() {
                writeln!(self.out, "{}", note)?;
            }
        }
    }
}
