use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Piece {
    WhitePawn,
    BlackPawn,
    WhiteKnight,
    BlackKnight,
    WhiteBishop,
    BlackBishop,
    WhiteRook,
    BlackRook,
    WhiteQueen,
    BlackQueen,
    WhiteKing,
    BlackKing,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline]
    pub fn new(r: Role, c: Color) -> Self {
        use {Color::*, Piece::*};
        match (r, c) {
            (Role::Pawn, White) => WhitePawn,
            (Role::Pawn, Black) => BlackPawn,
            (Role::Knight, White) => WhiteKnight,
            (Role::Knight, Black) => BlackKnight,
            (Role::Bishop, White) => WhiteBishop,
            (Role::Bishop, Black) => BlackBishop,
            (Role::Rook, White) => WhiteRook,
            (Role::Rook, Black) => BlackRook,
            (Role::Queen, White) => WhiteQueen,
            (Role::Queen, Black) => BlackQueen,
            (Role::King, White) => WhiteKing,
            (Role::King, Black) => BlackKing,
        }
    }

    /// This piece's [`Role`].
    #[inline]
    pub fn role(&self) -> Role {
        use Piece::*;
        match self {
            WhitePawn | BlackPawn => Role::Pawn,
            WhiteKnight | BlackKnight => Role::Knight,
            WhiteBishop | BlackBishop => Role::Bishop,
            WhiteRook | BlackRook => Role::Rook,
            WhiteQueen | BlackQueen => Role::Queen,
            WhiteKing | BlackKing => Role::King,
        }
    }

    /// This piece's [`Color`].
    #[inline]
    pub fn color(&self) -> Color {
        use Piece::*;
        match self {
            WhitePawn | WhiteKnight | WhiteBishop | WhiteRook | WhiteQueen | WhiteKing => {
                Color::White
            }
            BlackPawn | BlackKnight | BlackBishop | BlackRook | BlackQueen | BlackKing => {
                Color::Black
            }
        }
    }

    fn figurine(&self) -> char {
        use Piece::*;
        match self {
            WhitePawn => '♙',
            WhiteKnight => '♘',
            WhiteBishop => '♗',
            WhiteRook => '♖',
            WhiteQueen => '♕',
            WhiteKing => '♔',
            BlackPawn => '♟',
            BlackKnight => '♞',
            BlackBishop => '♝',
            BlackRook => '♜',
            BlackQueen => '♛',
            BlackKing => '♚',
        }
    }
}

/// Prints the piece's letter, upper case for white and lower case for black.
///
/// The alternate form `{:#}` prints the piece's figurine instead.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_char(self.figurine());
        }

        match self.color() {
            Color::White => write!(f, "{}", self.role().to_string().to_ascii_uppercase()),
            Color::Black => write!(f, "{}", self.role()),
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `PNBRQKpnbrqk`")]
pub struct ParsePieceError;

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = s.to_ascii_lowercase().parse().map_err(|_| ParsePieceError)?;

        if s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Piece::new(role, Color::White))
        } else {
            Ok(Piece::new(role, Color::Black))
        }
    }
}
