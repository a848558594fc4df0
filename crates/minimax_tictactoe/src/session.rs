//! Turn and mode controller.
//!
//! A [`GameSession`] owns everything a front end needs between clicks:
//! the board, whose turn it is, whether the game is still live and which
//! mode is being played. Front ends feed it human moves and render what
//! comes back.

use crate::action::{Move, MoveError};
use crate::rules::{Outcome, evaluate, winning_line};
use crate::search::{self, COMPUTER};
use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits across from the first player.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(alias = "pvp")]
    #[strum(to_string = "human-vs-human", serialize = "pvp")]
    HumanVsHuman,
    /// The human plays X against the minimax engine as O.
    #[serde(alias = "pvc")]
    #[strum(to_string = "human-vs-computer", serialize = "pvc")]
    HumanVsComputer,
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct TurnReport {
    /// The move the human made.
    human: Move,
    /// The computer's answer, if it moved.
    reply: Option<Move>,
    /// Verdict after both moves.
    outcome: Outcome,
}

/// A single game between two seats.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    active: bool,
    mode: GameMode,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session with an empty board and X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            active: true,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns true until the game is won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns the completed line, once someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board).map(|(_, line)| line)
    }

    /// Plays a human move, then lets the computer answer if it is its turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        if !self.active {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let human = self.apply(pos);

        let reply = if self.active
            && self.mode == GameMode::HumanVsComputer
            && self.to_move == COMPUTER
        {
            let reply_pos = search::best_move(&mut self.board)?;
            Some(self.apply(reply_pos))
        } else {
            None
        };

        Ok(TurnReport {
            human,
            reply,
            outcome: self.outcome(),
        })
    }

    /// Clears the board for a new game in the same mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(mode = %self.mode, "Restarting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.active = true;
        self.history.clear();
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    fn apply(&mut self, pos: Position) -> Move {
        let mov = Move::new(self.to_move, pos);
        self.board.place(pos, mov.player);
        self.history.push(mov);

        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.active = false;
        }
        debug!(%mov, %outcome, "Move applied");

        self.to_move = self.to_move.opponent();
        mov
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("pvc".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer);
        assert_eq!(
            "Human-vs-Human".parse::<GameMode>().unwrap(),
            GameMode::HumanVsHuman
        );
        assert_eq!(GameMode::HumanVsComputer.to_string(), "human-vs-computer");
        assert!("solo".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_human_moves_alternate() {
        let mut session = GameSession::new(GameMode::HumanVsHuman);
        let report = session.play(Position::Center).unwrap();
        assert_eq!(report.human().player(), Player::X);
        assert_eq!(*report.reply(), None);
        assert_eq!(session.to_move(), Player::O);

        let report = session.play(Position::TopLeft).unwrap();
        assert_eq!(report.human().player(), Player::O);
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut session = GameSession::new(GameMode::HumanVsHuman);
        session.play(Position::Center).unwrap();
        assert_eq!(
            session.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session.history().len(), 1);
    }
}
