//! Kani arbitrary implementations for tic-tac-toe types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use super::{Board, Player, Position, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::ALL[index as usize]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Board::from_squares(squares)
    }
}
