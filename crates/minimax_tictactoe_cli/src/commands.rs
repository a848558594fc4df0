//! One-shot commands: evaluate, best-move, analyze.

use anyhow::Result;
use minimax_tictactoe::{Board, Player, analyze, evaluate};
use serde_json::json;
use std::io::Write;
use tracing::instrument;

/// Prints the verdict for `board`.
#[instrument(skip(output))]
pub fn run_evaluate<W: Write>(board: Board, json: bool, mut output: W) -> Result<()> {
    let outcome = evaluate(&board);
    if json {
        let value = json!({ "board": board.to_string(), "outcome": outcome });
        writeln!(output, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(output, "{}", board.display())?;
        writeln!(output, "{}", outcome)?;
    }
    Ok(())
}

/// Prints the optimal move for `player`.
#[instrument(skip(output))]
pub fn run_best_move<W: Write>(board: Board, player: Player, json: bool, mut output: W) -> Result<()> {
    let mut scratch = board;
    let analysis = analyze(&mut scratch, player)?;
    if json {
        let value = json!({
            "player": analysis.player(),
            "index": analysis.best().to_index(),
            "position": analysis.best(),
            "score": analysis.score(),
        });
        writeln!(output, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(
            output,
            "{} {}",
            analysis.best().to_index(),
            analysis.best().label()
        )?;
    }
    Ok(())
}

/// Prints the full root analysis as JSON.
#[instrument(skip(output))]
pub fn run_analyze<W: Write>(board: Board, player: Player, mut output: W) -> Result<()> {
    let mut scratch = board;
    let analysis = analyze(&mut scratch, player)?;
    writeln!(output, "{}", serde_json::to_string_pretty(&analysis)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_evaluate_text_and_json() {
        let board: Board = "XXX......".parse().unwrap();
        let text = capture(|out| run_evaluate(board, false, out));
        assert!(text.ends_with("X wins!\n"), "{}", text);

        let json = capture(|out| run_evaluate(board, true, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["board"], "XXX......");
        assert_eq!(value["outcome"]["Won"], "X");
    }

    #[test]
    fn test_best_move_blocks() {
        let board: Board = "XX..O....".parse().unwrap();
        let text = capture(|out| run_best_move(board, Player::O, false, out));
        assert_eq!(text, "2 Top-right\n");
    }

    #[test]
    fn test_analyze_json_lists_candidates() {
        let board: Board = "XX..O....".parse().unwrap();
        let json = capture(|out| run_analyze(board, Player::O, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["best"], "TopRight");
        assert_eq!(value["candidates"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_decided_board_is_an_error() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut output = Vec::new();
        let err = run_best_move(board, Player::O, false, &mut output).unwrap_err();
        assert!(err.to_string().contains("No move available"));
    }
}
