//! Console game loop: prompts, rendering, and result messages.
//!
//! Everything here is glue around the core. The board state and the
//! search engine never touch stdin or stdout.

mod orchestrator;
mod players;

pub use orchestrator::Orchestrator;
pub use players::{Agent, HumanAgent, MinimaxAgent};

use crate::config::GameConfig;
use crate::engine::{AI_WIN, HUMAN_WIN, Minimax, SearchResult};
use crate::games::tictactoe::{BoardState, GameStatus, Player, new_game};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::instrument;

/// Plays one human-vs-AI game.
///
/// Prompts go to `prompts`; the banner, boards, and result go to `out`.
#[instrument(skip_all, fields(human = %config.human(), human_first = config.human_first()))]
pub fn play_interactive<R, P, W>(
    config: &GameConfig,
    input: R,
    prompts: P,
    mut out: W,
) -> Result<GameStatus>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let human = *config.human();
    let ai = human.opponent();

    writeln!(out, "Welcome to Tic-Tac-Toe!")?;
    writeln!(out, "You are '{}', and the AI is '{}'.", human, ai)?;
    writeln!(out, "The board positions are numbered from 1 to 9.\n")?;

    let first = if *config.human_first() { human } else { ai };
    let human_agent: Box<dyn Agent> = Box::new(HumanAgent::new("You", input, prompts));
    let ai_agent: Box<dyn Agent> =
        Box::new(MinimaxAgent::new("AI", ai).with_stats(*config.show_stats()));
    let (player_x, player_o) = match human {
        Player::X => (human_agent, ai_agent),
        Player::O => (ai_agent, human_agent),
    };

    let state = new_game(human, first);
    let status = {
        let mut orchestrator = Orchestrator::new(state, player_x, player_o, &mut out);
        orchestrator.run()?
    };

    let message = match status {
        GameStatus::Won(winner) if winner == human => "Congratulations! You win!",
        GameStatus::Won(_) => "AI wins! Better luck next time.",
        GameStatus::Draw | GameStatus::InProgress => "It's a draw! Good game!",
    };
    writeln!(out, "{}", message)?;
    Ok(status)
}

/// Pits the engine against itself from an empty board.
#[instrument(skip(out))]
pub fn self_play<W: Write>(show_stats: bool, mut out: W) -> Result<GameStatus> {
    writeln!(out, "AI (X) vs AI (O)\n")?;

    let status = Orchestrator::new(
        new_game(Player::O, Player::X),
        Box::new(MinimaxAgent::new("AI X", Player::X).with_stats(show_stats)),
        Box::new(MinimaxAgent::new("AI O", Player::O).with_stats(show_stats)),
        &mut out,
    )
    .run()?;

    match status {
        GameStatus::Won(winner) => writeln!(out, "{} wins.", winner)?,
        GameStatus::Draw | GameStatus::InProgress => writeln!(out, "It's a draw.")?,
    }
    Ok(status)
}

/// Prints the engine's choice for the side to move in `cells`.
///
/// The side to move plays the AI role. When `to_move` is `None` it is
/// inferred from the mark counts, assuming X moved first.
#[instrument(skip(out))]
pub fn analyze_position<W: Write>(
    cells: &str,
    to_move: Option<Player>,
    mut out: W,
) -> Result<Option<SearchResult>> {
    let parsed = BoardState::from_cells_str(cells, Player::X, Player::O)
        .with_context(|| format!("Invalid board {:?}", cells))?;
    let mover = to_move.unwrap_or_else(|| BoardState::inferred_to_move(parsed.board()));
    let state = BoardState::from_board(parsed.board().clone(), mover, mover.opponent());

    writeln!(out, "{}\n", state.board().display())?;

    match state.status() {
        GameStatus::Won(winner) => {
            writeln!(out, "Game over: {} has won.", winner)?;
            return Ok(None);
        }
        GameStatus::Draw => {
            writeln!(out, "Game over: draw.")?;
            return Ok(None);
        }
        GameStatus::InProgress => {}
    }

    let Some(result) = Minimax::new().search(&state) else {
        return Ok(None);
    };
    let verdict = match result.value {
        AI_WIN => "forced win",
        HUMAN_WIN => "forced loss",
        _ => "draw with best play",
    };
    let label = result.position().map(|pos| pos.label()).unwrap_or("?");
    writeln!(
        out,
        "Best move for {}: {} ({}), {}",
        mover,
        result.index + 1,
        label,
        verdict
    )?;
    writeln!(out, "Search: {}", result.stats)?;
    Ok(Some(result))
}
