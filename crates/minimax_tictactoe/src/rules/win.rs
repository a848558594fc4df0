//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// The 8 winning lines, in scan order.
///
/// Rows first, then columns, then the two diagonals. When a board holds
/// more than one completed line the earliest one here decides.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    WIN_PATTERNS.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for player in [Player::X, Player::O] {
            for line in WIN_PATTERNS {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, player);
                }
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_pattern_decides_double_win() {
        // Unreachable in play: X owns row 0 and O owns row 2.
        let board: Board = "XXX...OOO".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((Player::X, WIN_PATTERNS[0]))
        );

        // Column 0 is scanned before column 2.
        let board: Board = "X.O/X.O/X.O".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::X, WIN_PATTERNS[3])));
    }
}
