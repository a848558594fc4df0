//! Exhaustive minimax search.
//!
//! The computer plays O and maximizes; X minimizes. Every legal line is
//! searched to the end with no pruning and no transposition cache: from
//! any position the tree has at most 9! leaves.
//!
//! Search works on the caller's board in place. A mark is placed, the
//! child is scored, then the mark is cleared again, so the board is
//! identical before and after every call.

use crate::rules::{Outcome, evaluate};
use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Minimax value of a position from O's point of view, in `[-10, 10]`.
pub type Score = i32;

/// Score of an immediate O win; each ply of delay costs one point.
pub const WIN_SCORE: Score = 10;

/// The computer's mark. O is the maximizing player.
pub const COMPUTER: Player = Player::O;

/// Error returned when a search has nothing to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is full or already decided.
    #[display("No move available: the game is already decided")]
    NoMoveAvailable,
}

impl std::error::Error for SearchError {}

/// Score of a single root candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct CandidateScore {
    /// Square the mover would take.
    position: Position,
    /// Minimax value after taking it.
    score: Score,
}

/// Full result of a root search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Analysis {
    /// Side the search chose for.
    player: Player,
    /// Chosen move.
    best: Position,
    /// Minimax value of the chosen move.
    score: Score,
    /// Every candidate, in ascending index order.
    candidates: Vec<CandidateScore>,
    /// Number of positions scored, including terminal ones.
    nodes: u64,
}

/// Scores a position by full-depth minimax.
///
/// Decided boards score `10 - depth` when O has won, `depth - 10` when X
/// has won and `0` on a draw, so quicker wins and slower losses are
/// preferred. Otherwise each empty square is tried for the mover (O when
/// `maximizing`, X otherwise) and the best child score is kept.
///
/// `depth` counts plies below the root and never exceeds 9 in a real game.
/// Larger values are clamped to [`WIN_SCORE`], so the result always stays
/// in `[-10, 10]`.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> Score {
    let mut nodes = 0;
    search(board, depth, maximizing, &mut nodes)
}

fn search(board: &mut Board, depth: u32, maximizing: bool, nodes: &mut u64) -> Score {
    *nodes += 1;

    let penalty = Score::try_from(depth).map_or(WIN_SCORE, |d| d.min(WIN_SCORE));
    match evaluate(board) {
        Outcome::Won(Player::O) => return WIN_SCORE - penalty,
        Outcome::Won(Player::X) => return penalty - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, mover);
        let score = search(board, depth.saturating_add(1), !maximizing, nodes);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every legal move for `player` and picks the best one.
///
/// Candidates are tried in ascending index order. O keeps a candidate
/// only if it scores strictly higher than the current best, X only if
/// strictly lower, so ties go to the lowest index.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is full or
/// already won.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &mut Board, player: Player) -> Result<Analysis, SearchError> {
    if evaluate(board).is_terminal() {
        warn!("Search requested on a decided board");
        return Err(SearchError::NoMoveAvailable);
    }

    let snapshot = *board;

    let maximizing = player == COMPUTER;
    let mut nodes = 0;
    let mut candidates = Vec::with_capacity(9);
    let mut best: Option<CandidateScore> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, player);
        let score = search(board, 1, !maximizing, &mut nodes);
        board.clear(pos);

        let candidate = CandidateScore::new(pos, score);
        candidates.push(candidate);

        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(candidate);
        }
    }

    debug_assert_eq!(*board, snapshot, "search must restore the board");

    let best = best.ok_or(SearchError::NoMoveAvailable)?;
    debug!(position = %best.position, score = best.score, nodes, "Search complete");

    Ok(Analysis {
        player,
        best: best.position,
        score: best.score,
        candidates,
        nodes,
    })
}

/// Returns the optimal move for `player`.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is full or
/// already won.
pub fn best_move_for(board: &mut Board, player: Player) -> Result<Position, SearchError> {
    analyze(board, player).map(|analysis| analysis.best)
}

/// Returns the computer's (O's) optimal move.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is full or
/// already won.
pub fn best_move(board: &mut Board) -> Result<Position, SearchError> {
    best_move_for(board, COMPUTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores_are_depth_weighted() {
        let mut o_won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(minimax(&mut o_won, 3, true), 7);

        let mut x_won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&mut x_won, 4, false), -6);

        let mut draw: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(minimax(&mut draw, 9, true), 0);
    }

    #[test]
    fn test_deep_scores_stay_in_range() {
        let mut o_won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(minimax(&mut o_won, 25, true), 0);
        assert_eq!(minimax(&mut o_won, u32::MAX, true), 0);

        let mut x_won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&mut x_won, u32::MAX, false), 0);

        let mut open: Board = "XX..O....".parse().unwrap();
        let score = minimax(&mut open, u32::MAX, true);
        assert!((-WIN_SCORE..=WIN_SCORE).contains(&score), "{}", score);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O completes the middle row at 5 on the first ply.
        let mut board: Board = "XX./OO./X..".parse().unwrap();
        let analysis = analyze(&mut board, Player::O).unwrap();
        assert_eq!(*analysis.best(), Position::MiddleRight);
        assert_eq!(*analysis.score(), WIN_SCORE - 1);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let mut board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(best_move_for(&mut board, Player::X), Ok(Position::TopRight));
    }

    #[test]
    fn test_candidates_listed_in_scan_order() {
        let mut board: Board = "XX..O....".parse().unwrap();
        let analysis = analyze(&mut board, Player::O).unwrap();
        let positions: Vec<_> = analysis.candidates().iter().map(|c| *c.position()).collect();
        assert_eq!(positions, Position::valid_moves(&board));
        assert!(*analysis.nodes() > positions.len() as u64);
    }

    #[test]
    fn test_decided_board_has_no_move() {
        let mut won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(best_move(&mut won), Err(SearchError::NoMoveAvailable));

        let mut full: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(best_move(&mut full), Err(SearchError::NoMoveAvailable));
    }
}
