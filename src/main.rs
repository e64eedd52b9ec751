//! Tic-tac-toe binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{GameConfig, Player, analyze_position, play_interactive, self_play};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        human: None,
        ai_first: false,
        stats: false,
        config: None,
    }) {
        Command::Play {
            human,
            ai_first,
            stats,
            config,
        } => run_play(human, ai_first, stats, config),
        Command::SelfPlay { stats } => {
            self_play(stats, io::stdout().lock())?;
            Ok(())
        }
        Command::Analyze { cells, to_move } => {
            analyze_position(&cells, to_move, io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game, with CLI flags overriding the config file.
#[instrument]
fn run_play(
    human: Option<Player>,
    ai_first: bool,
    stats: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut game_config = GameConfig::load(config.as_deref())?;
    if let Some(human) = human {
        game_config = game_config.with_human(human);
    }
    if ai_first {
        game_config = game_config.with_human_first(false);
    }
    if stats {
        game_config = game_config.with_show_stats(true);
    }
    info!(?game_config, "Starting interactive game");

    play_interactive(&game_config, io::stdin().lock(), io::stdout(), io::stdout())?;
    Ok(())
}
