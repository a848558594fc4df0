//! Kani proof harnesses for the terminal-state detector.

use super::{Outcome, WIN_PATTERNS, evaluate};
use crate::{Board, Square};

/// Evaluate never panics, whatever the marks.
#[kani::proof]
fn evaluate_is_total() {
    let board: Board = kani::any();
    let _ = evaluate(&board);
}

/// A reported winner really owns a full line.
#[kani::proof]
fn winner_owns_a_line() {
    let board: Board = kani::any();
    if let Outcome::Won(player) = evaluate(&board) {
        let owned = WIN_PATTERNS
            .iter()
            .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)));
        assert!(owned);
    }
}

/// Ongoing always means some square is still empty.
#[kani::proof]
fn ongoing_has_an_empty_square() {
    let board: Board = kani::any();
    if evaluate(&board) == Outcome::Ongoing {
        assert!(!board.is_full());
    }
}
