//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use minimax_tictactoe::{Board, GameMode, Player};

/// Tic-tac-toe against an optimal minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an unbeatable computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter, overrides RUST_LOG and the config file
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Game mode: human-vs-human (pvp) or human-vs-computer (pvc)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Show the engine's suggestion before each human move
        #[arg(long)]
        hints: bool,
    },

    /// Classify a board as won, drawn or in progress
    Evaluate {
        /// Board as nine cells, e.g. "XX..O...." (`.`, `_` or `-` for empty)
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Board as nine cells, e.g. "XX..O...."
        board: Board,

        /// Side to move
        #[arg(short, long, default_value = "o")]
        player: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print every candidate move with its minimax score, as JSON
    Analyze {
        /// Board as nine cells, e.g. "XX..O...."
        board: Board,

        /// Side to move
        #[arg(short, long, default_value = "o")]
        player: Player,
    },
}
