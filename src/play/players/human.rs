//! Human agent that reads moves from a text prompt.

use super::Agent;
use crate::games::tictactoe::{BoardState, Position};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player typing 1-9 (or a cell label) at a prompt.
///
/// Junk, out-of-range, and occupied-cell input is answered with a
/// message and a fresh prompt. End of input is an error.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    /// Creates a new human agent.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the agent, returning its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    #[instrument(skip(self, state), fields(human = %self.name))]
    fn choose_move(&mut self, state: &BoardState) -> Result<usize> {
        let mut line = String::new();
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed before a move was entered");
            }

            let entry = line.trim();
            match Position::from_label_or_number(entry) {
                Some(pos) if state.board().is_empty(pos.to_index()) => {
                    debug!(position = %pos, "Human chose position");
                    return Ok(pos.to_index());
                }
                Some(pos) => {
                    writeln!(
                        self.output,
                        "Invalid move. {} is taken, please choose an empty cell.",
                        pos
                    )?;
                }
                None if entry.parse::<i64>().is_ok() => {
                    writeln!(
                        self.output,
                        "Invalid move. Please choose a number from 1 to 9."
                    )?;
                }
                None => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                }
            }
            debug!(entry, "Rejected human input");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn agent(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new("Tester", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(agent: HumanAgent<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(agent.into_parts().1).unwrap()
    }

    #[test]
    fn test_converts_to_zero_based() {
        let mut human = agent("5\n");
        assert_eq!(human.choose_move(&BoardState::new()).unwrap(), 4);
    }

    #[test]
    fn test_reprompts_on_junk_and_range() {
        let mut human = agent("abc\n0\n10\n\n7\n");
        assert_eq!(human.choose_move(&BoardState::new()).unwrap(), 6);

        let out = transcript(human);
        assert_eq!(out.matches("Enter your move (1-9): ").count(), 5);
        assert_eq!(out.matches("Invalid input").count(), 2);
        assert_eq!(out.matches("number from 1 to 9").count(), 2);
    }

    #[test]
    fn test_reprompts_on_occupied() {
        let mut state = BoardState::new();
        state.apply_move(0).unwrap();
        let mut human = agent("1\n2\n");
        assert_eq!(human.choose_move(&state).unwrap(), 1);
        assert!(transcript(human).contains("Top-left is taken"));
    }

    #[test]
    fn test_accepts_label() {
        let mut human = agent("center\n");
        assert_eq!(human.choose_move(&BoardState::new()).unwrap(), 4);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut human = agent("x\n");
        assert!(human.choose_move(&BoardState::new()).is_err());
    }
}
