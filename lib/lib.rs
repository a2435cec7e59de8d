/// Chess domain types.
pub mod chess;
/// A game of chess between two players sharing the board.
pub mod game;
/// The rules of chess.
pub mod rules;
