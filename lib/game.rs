use crate::chess::{Board, Color, Move, Piece, Role, Square, Status};
use crate::rules::{self, Destinations, InvariantViolation};
use derive_more::{Display, Error, From};
use std::fmt;
use tracing::{debug, instrument};

/// A move played in a [`Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Record {
    /// The piece that moved.
    pub piece: Piece,
    /// The move itself.
    pub r#move: Move,
    /// The piece captured, if any.
    pub capture: Option<Piece>,
}

/// Prints the record in long algebraic notation, such as `Ng1-f3` or `e4xd5`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.piece.role() != Role::Pawn {
            write!(f, "{}", self.piece.role().to_string().to_ascii_uppercase())?;
        }

        let sep = if self.capture.is_some() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.r#move.whence(), sep, self.r#move.whither())
    }
}

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
pub enum InvalidMove {
    #[display(fmt = "the game has already ended, {_0}")]
    GameHasEnded(#[error(not(source))] Status),

    #[display(fmt = "move `{_0}` is illegal in this position")]
    IllegalMove(#[error(not(source))] Move),

    #[display(fmt = "the board cannot be judged by the rules")]
    InvariantViolation(InvariantViolation),
}

/// A game of chess between two players sharing the board.
///
/// Only the board, the side to move and the history are kept, everything
/// else, including whether the game has ended, is derived from them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<Record>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the initial board, with white to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The moves played so far.
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// The pieces captured by a player so far.
    pub fn captured(&self, by: Color) -> impl Iterator<Item = Piece> + '_ {
        self.history
            .iter()
            .filter(move |r| r.piece.color() == by)
            .filter_map(|r| r.capture)
    }

    /// The current [`Status`] from the point of view of the side to move.
    pub fn status(&self) -> Result<Status, InvariantViolation> {
        rules::status(&self.board, self.turn)
    }

    /// The squares the piece on `whence` may move to.
    ///
    /// This is empty unless `whence` holds a piece of the side to move.
    pub fn moves(&self, whence: Square) -> Result<Destinations, InvariantViolation> {
        rules::legal_destinations(&self.board, whence, self.turn)
    }

    /// Plays a move if it is legal, otherwise returns the reason why not.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), ret, err)]
    pub fn execute(&mut self, m: Move) -> Result<Record, InvalidMove> {
        let status = self.status()?;
        if status.is_terminal() {
            return Err(InvalidMove::GameHasEnded(status));
        }

        if !rules::is_valid_move(&self.board, m.whence(), m.whither(), self.turn)? {
            return Err(InvalidMove::IllegalMove(m));
        }

        let Some(piece) = self.board[m.whence()] else {
            return Err(InvalidMove::IllegalMove(m));
        };

        let (board, capture) = rules::make_move(&self.board, m.whence(), m.whither());
        let record = Record {
            piece,
            r#move: m,
            capture,
        };

        self.board = board;
        self.turn = !self.turn;
        self.history.push(record);

        debug!(board = %self.board, %record);

        Ok(record)
    }

    /// Starts over from the initial board.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}
