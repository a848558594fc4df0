//! Exhaustive tests for terminal-state detection.

use minimax_tictactoe::{Board, Outcome, Player, Position, Square, WIN_PATTERNS, evaluate};

/// Every assignment of {empty, X, O} to the 9 squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn owns(board: &Board, player: Player, line: [Position; 3]) -> bool {
    line.iter().all(|pos| board.get(*pos) == Square::Occupied(player))
}

#[test]
fn test_evaluate_matches_reference_on_every_board() {
    let mut seen = 0;
    for board in all_boards() {
        let first_line = WIN_PATTERNS.iter().find_map(|line| {
            [Player::X, Player::O]
                .into_iter()
                .find(|player| owns(&board, *player, *line))
        });

        let expected = match first_line {
            Some(player) => Outcome::Won(player),
            None if board.squares().iter().all(|s| *s != Square::Empty) => Outcome::Draw,
            None => Outcome::Ongoing,
        };

        assert_eq!(evaluate(&board), expected, "board {}", board);
        assert_eq!(evaluate(&board), evaluate(&board), "idempotent on {}", board);
        seen += 1;
    }
    assert_eq!(seen, 19_683);
}

#[test]
fn test_concrete_boards() {
    let cases = [
        (".........", Outcome::Ongoing),
        ("XXX......", Outcome::Won(Player::X)),
        ("XOXXOOOXX", Outcome::Draw),
        ("XOXOXO...", Outcome::Ongoing),
        ("XOXOXOOXO", Outcome::Draw),
        ("O..O..O..", Outcome::Won(Player::O)),
        ("..X.X.X..", Outcome::Won(Player::X)),
    ];
    for (text, expected) in cases {
        let board: Board = text.parse().unwrap();
        assert_eq!(evaluate(&board), expected, "board {}", text);
    }
}
