use crate::chess::Color;
use derive_more::Display;

/// The state of a game of chess, as seen by the side to move.
///
/// It is always derived from the board and the side to move, never tracked
/// on its own.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[display(fmt = "ongoing")]
    Ongoing,

    #[display(fmt = "the {_0} king is in check")]
    Check(Color),

    #[display(fmt = "the {_0} player is checkmated")]
    Checkmate(Color),

    #[display(fmt = "stalemate")]
    Stalemate,
}

impl Status {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Checkmate(_) | Status::Stalemate)
    }

    /// The winning side, if the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Status::Checkmate(c) => Some(!c),
            _ => None,
        }
    }
}
