//! Line-oriented interactive game loop.

use crate::config::PlayConfig;
use anyhow::Result;
use minimax_tictactoe::{GameMode, GameSession, MoveError, Position, analyze};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Enter 1-9 or a square name (e.g. \"center\"). \
Other commands: hint, restart, mode <human-vs-human|human-vs-computer>, help, quit";

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Place(Position),
    Hint,
    Restart,
    Mode(GameMode),
    Help,
    Quit,
}

/// Parses one line of input. Numbers are the 1-9 keys shown on the board.
fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    let lower = line.to_lowercase();
    match lower.as_str() {
        "hint" | "h" => return Some(Input::Hint),
        "restart" | "r" => return Some(Input::Restart),
        "help" | "?" => return Some(Input::Help),
        "quit" | "q" | "exit" => return Some(Input::Quit),
        _ => {}
    }

    if let Some(mode) = lower.strip_prefix("mode") {
        return mode.trim().parse().ok().map(Input::Mode);
    }

    if let Ok(key) = line.parse::<usize>() {
        return key
            .checked_sub(1)
            .and_then(Position::from_index)
            .map(Input::Place);
    }

    Position::from_label_or_number(line).map(Input::Place)
}

/// Runs a game session until the input ends or the player quits.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub fn run<R: BufRead, W: Write>(config: &PlayConfig, input: R, mut output: W) -> Result<()> {
    let mut session = GameSession::new(*config.mode());
    info!("Starting interactive game");

    writeln!(output, "Mode: {}", session.mode())?;
    writeln!(output, "{}", HELP)?;
    show_board(&session, *config.show_hints(), &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_input(&line) else {
            writeln!(output, "Unrecognized input {:?}. {}", line.trim(), HELP)?;
            continue;
        };
        debug!(?command, "Player input");

        match command {
            Input::Quit => break,
            Input::Help => writeln!(output, "{}", HELP)?,
            Input::Hint => show_hint(&session, &mut output)?,
            Input::Restart => {
                session.restart();
                writeln!(output, "New game.")?;
                show_board(&session, *config.show_hints(), &mut output)?;
            }
            Input::Mode(mode) => {
                session.set_mode(mode);
                writeln!(output, "Mode: {}. New game.", mode)?;
                show_board(&session, *config.show_hints(), &mut output)?;
            }
            Input::Place(pos) => match session.play(pos) {
                Ok(report) => {
                    writeln!(output, "{}", report.human())?;
                    if let Some(reply) = report.reply() {
                        writeln!(output, "Computer plays {}", reply.position())?;
                    }
                    show_board(&session, *config.show_hints(), &mut output)?;
                    if report.outcome().is_terminal() {
                        writeln!(output, "{}", report.outcome())?;
                        if let Some(line) = session.winning_line() {
                            let labels: Vec<_> = line.iter().map(|p| p.label()).collect();
                            writeln!(output, "Winning line: {}", labels.join(", "))?;
                        }
                        writeln!(output, "Type \"restart\" to play again.")?;
                    }
                }
                Err(MoveError::Search(err)) => return Err(err.into()),
                Err(err) => {
                    warn!(%err, "Move rejected");
                    writeln!(output, "{}", err)?;
                }
            },
        }
    }

    info!(moves = session.history().len(), "Leaving interactive game");
    Ok(())
}

fn show_board<W: Write>(session: &GameSession, hints: bool, output: &mut W) -> Result<()> {
    writeln!(output, "\n{}\n", session.board().display())?;
    if session.is_active() {
        writeln!(output, "{} to move.", session.to_move())?;
        if hints {
            show_hint(session, output)?;
        }
    }
    Ok(())
}

fn show_hint<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    if !session.is_active() {
        writeln!(output, "The game is over.")?;
        return Ok(());
    }
    let mut scratch = *session.board();
    let analysis = analyze(&mut scratch, session.to_move())?;
    writeln!(
        output,
        "Hint: {} plays {} (score {})",
        analysis.player(),
        analysis.best(),
        analysis.score()
    )?;
    Ok(())
}
