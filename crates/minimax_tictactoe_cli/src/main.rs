//! Minimax tic-tac-toe - terminal front end.
//!
//! Play against another human or the unbeatable minimax engine, or ask
//! the engine about a single board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, config, hints } => {
            let config = PlayConfig::load(config.as_deref())?.with_overrides(mode, hints);
            init_tracing(cli.log_filter.as_deref(), config.log_filter());
            debug!(?config, "Resolved play configuration");

            let stdin = std::io::stdin();
            play::run(&config, stdin.lock(), std::io::stdout())
        }
        Command::Evaluate { board, json } => {
            init_tracing(cli.log_filter.as_deref(), "warn");
            commands::run_evaluate(board, json, std::io::stdout())
        }
        Command::BestMove { board, player, json } => {
            init_tracing(cli.log_filter.as_deref(), "warn");
            commands::run_best_move(board, player, json, std::io::stdout())
        }
        Command::Analyze { board, player } => {
            init_tracing(cli.log_filter.as_deref(), "warn");
            commands::run_analyze(board, player, std::io::stdout())
        }
    }
}

/// Installs the tracing subscriber on stderr.
///
/// Precedence: `--log-filter`, then `RUST_LOG`, then the config default.
fn init_tracing(cli_filter: Option<&str>, default_filter: &str) {
    let filter = match cli_filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
