use crate::chess::{Board, Piece, Square};
use tracing::instrument;

/// Moves the piece on `whence` to `whither` on a new board.
///
/// Returns the new board and the piece that previously occupied `whither`,
/// if any. This does not verify whether the move is legal, which is the
/// caller's responsibility, see [`is_valid_move`][`crate::rules::is_valid_move`].
#[instrument(level = "trace", ret)]
pub fn make_move(board: &Board, whence: Square, whither: Square) -> (Board, Option<Piece>) {
    let mut next = *board;
    let piece = next.set(whence, None);
    let capture = next.set(whither, piece);
    (next, capture)
}
