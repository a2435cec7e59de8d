use crate::chess::{Board, Color, Role, Square};
use std::iter::successors;

/// Whether the piece on `whence` may move to `whither` according to its
/// pattern of movement, regardless of the safety of its own king.
///
/// This is false if `whence` is empty, if `whither` is `whence` or if
/// `whither` holds a piece of the same color.
pub fn is_pseudo_legal(board: &Board, whence: Square, whither: Square) -> bool {
    let Some(piece) = board[whence] else {
        return false;
    };

    if whence == whither || board.color_on(whither) == Some(piece.color()) {
        return false;
    }

    let dr = whither.row() as i8 - whence.row() as i8;
    let dc = whither.col() as i8 - whence.col() as i8;

    match piece.role() {
        Role::Pawn => is_pawn_move(board, piece.color(), whence, whither, dr, dc),
        Role::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
        Role::Bishop => dr.abs() == dc.abs() && is_path_clear(board, whence, whither),
        Role::Rook => (dr == 0 || dc == 0) && is_path_clear(board, whence, whither),
        Role::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && is_path_clear(board, whence, whither)
        }
        Role::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

/// The change in row of a pawn of this [`Color`] advancing one square.
#[inline]
fn forward(c: Color) -> i8 {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The row where pawns of this [`Color`] start the game.
#[inline]
fn home_row(c: Color) -> u8 {
    match c {
        Color::White => 6,
        Color::Black => 1,
    }
}

fn is_pawn_move(board: &Board, c: Color, whence: Square, whither: Square, dr: i8, dc: i8) -> bool {
    let step = forward(c);
    let target = board[whither];

    match (dr, dc.abs()) {
        (dr, 0) if dr == step => target.is_none(),
        (dr, 0) if dr == 2 * step => {
            whence.row() == home_row(c)
                && target.is_none()
                && whence.offset(step, 0).is_some_and(|sq| board[sq].is_none())
        }
        (dr, 1) if dr == step => target.is_some_and(|p| p.color() != c),
        _ => false,
    }
}

/// The squares strictly between `whence` and `whither`.
///
/// Both squares must share a row, a column or a diagonal.
fn between(whence: Square, whither: Square) -> impl Iterator<Item = Square> {
    let dr = (whither.row() as i8 - whence.row() as i8).signum();
    let dc = (whither.col() as i8 - whence.col() as i8).signum();

    successors(whence.offset(dr, dc), move |sq| sq.offset(dr, dc))
        .take_while(move |&sq| sq != whither)
}

fn is_path_clear(board: &Board, whence: Square, whither: Square) -> bool {
    between(whence, whither).all(|sq| board[sq].is_none())
}
