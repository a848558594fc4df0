//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a board as won, drawn or still in play.
//! They never fail: any assignment of marks, reachable or not, gets a
//! verdict.

mod draw;
mod outcome;
mod win;

#[cfg(kani)]
mod verification;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate};
pub use win::{WIN_PATTERNS, check_winner, winning_line};
