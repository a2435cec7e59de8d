use crate::chess::{Board, Color, Piece, Role, Square};
use crate::rules::is_pseudo_legal;
use derive_more::{Display, Error};

/// The reason why a [`Board`] cannot be judged by the rules.
///
/// Every board reachable through legal play holds exactly one king of each
/// color, so this always points at a board that was assembled by hand.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum InvariantViolation {
    #[display(fmt = "the board has no {_0} king")]
    MissingKing(#[error(not(source))] Color),

    #[display(fmt = "the board has more than one {_0} king")]
    MultipleKings(#[error(not(source))] Color),
}

/// The [`Square`] occupied by the king of a [`Color`].
pub fn king(board: &Board, side: Color) -> Result<Square, InvariantViolation> {
    let mut kings = board.by_piece(Piece::new(Role::King, side));

    match (kings.next(), kings.next()) {
        (Some(sq), None) => Ok(sq),
        (None, _) => Err(InvariantViolation::MissingKing(side)),
        (Some(_), Some(_)) => Err(InvariantViolation::MultipleKings(side)),
    }
}

/// Whether the king of a [`Color`] is attacked by any opposing piece.
pub fn is_check(board: &Board, side: Color) -> Result<bool, InvariantViolation> {
    let target = king(board, side)?;

    Ok(board
        .by_color(!side)
        .any(|whence| is_pseudo_legal(board, whence, target)))
}

/// Whether the side to move may move the piece on `whence` to `whither`.
///
/// The move must follow the piece's pattern of movement and must not leave
/// its own king in check.
pub fn is_valid_move(
    board: &Board,
    whence: Square,
    whither: Square,
    side: Color,
) -> Result<bool, InvariantViolation> {
    if board.color_on(whence) != Some(side) || !is_pseudo_legal(board, whence, whither) {
        return Ok(false);
    }

    Ok(!exposes_king(board, whence, whither, side)?)
}

/// Plays the move on a scratch copy of the board and tests the safety of the king.
fn exposes_king(
    board: &Board,
    whence: Square,
    whither: Square,
    side: Color,
) -> Result<bool, InvariantViolation> {
    let mut scratch = *board;
    let piece = scratch.set(whence, None);
    scratch.set(whither, piece);
    is_check(&scratch, side)
}
