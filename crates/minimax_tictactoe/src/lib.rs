//! Minimax tic-tac-toe - board rules and an optimal computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 9 row-major squares, each empty or holding a mark
//! - **Rules**: pure terminal-state detection (win lines, full board)
//! - **Search**: exhaustive minimax with place/retract backtracking
//! - **Session**: turn and mode controller for front ends
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{best_move, evaluate, Board, Outcome, Position};
//!
//! let mut board: Board = "XX..O....".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//! assert_eq!(best_move(&mut board), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod kani_support;
mod position;
mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use position::Position;
pub use types::{Board, BoardParseError, Player, Square};

// Crate-level exports - Terminal-state detection
pub use rules::{Outcome, WIN_PATTERNS, check_winner, evaluate, is_draw, is_full, winning_line};

// Crate-level exports - Search engine
pub use search::{
    Analysis, COMPUTER, CandidateScore, Score, SearchError, WIN_SCORE, analyze, best_move,
    best_move_for, minimax,
};

// Crate-level exports - Turn/mode controller
pub use session::{GameMode, GameSession, TurnReport};
