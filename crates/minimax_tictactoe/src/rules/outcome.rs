//! Terminal-state classification.

use super::{draw::is_full, win::check_winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Verdict on a board. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{} wins!", _0)]
    Won(Player),
    /// Board is full with no completed line.
    #[display("It's a tie!")]
    Draw,
    /// Game continues.
    #[display("In progress")]
    Ongoing,
}

impl Outcome {
    /// Returns true once the game is decided.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

/// Classifies a board.
///
/// Win lines are checked first, in [`WIN_PATTERNS`](super::WIN_PATTERNS)
/// order; a full board without a line is a draw; anything else is
/// ongoing. Total over every assignment of marks.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
