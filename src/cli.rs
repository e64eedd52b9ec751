//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::Player;

/// Tic-tac-toe against an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an unbeatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game at the terminal
    Play {
        /// Mark for the human player (x or o)
        #[arg(long)]
        human: Option<Player>,

        /// Let the AI make the first move
        #[arg(long)]
        ai_first: bool,

        /// Print search statistics after each AI move
        #[arg(long)]
        stats: bool,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Watch the AI play itself (always a draw)
    SelfPlay {
        /// Print search statistics after each move
        #[arg(long)]
        stats: bool,
    },

    /// Show the best move for a position such as "XX.OO...."
    Analyze {
        /// Nine cells in row-major order: X, O, or . for empty
        cells: String,

        /// Side to move; inferred from the mark counts if omitted
        #[arg(long)]
        to_move: Option<Player>,
    },
}
