//! Legal move generation, move execution and classification of positions.
//!
//! The rules are pure functions of a [`Board`][`crate::chess::Board`] and
//! the side to move. They hold no state between calls, so the same board
//! may be queried from many threads at once.
//!
//! Castling, en passant and promotion are not part of these rules.

mod execution;
mod movement;
mod outcome;
mod safety;

pub use execution::*;
pub use movement::*;
pub use outcome::*;
pub use safety::*;

#[cfg(test)]
use crate::chess::{Board, Color};

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// Generates boards reachable through legal play from the initial board,
/// along with the side to move.
#[cfg(test)]
pub(crate) fn reachable() -> impl Strategy<Value = (Board, Color)> {
    (0..80usize, any::<Selector>())
        .prop_map(|(plies, selector)| {
            let mut board = Board::initial();
            let mut turn = Color::White;

            for _ in 0..plies {
                let moves = legal_moves(&board, turn).unwrap_or_default();
                match selector.try_select(moves) {
                    None => break,
                    Some(m) => {
                        board = make_move(&board, m.whence(), m.whither()).0;
                        turn = !turn;
                    }
                }
            }

            (board, turn)
        })
        .no_shrink()
}
