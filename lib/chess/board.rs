use crate::chess::{Color, File, ParsePieceError, Piece, Rank, Role, Square};
use derive_more::{DebugCustom, Display, Error, From};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The piece placement on the chess board.
///
/// This is a plain value, cheap to copy, and it does not validate whether
/// the placement it holds is reachable according to the rules of chess.
#[derive(DebugCustom, Copy, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board(\"{}\")", self)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut board = Board::empty();

                board
                    .squares
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                board
            })
            .boxed()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board without any pieces.
    #[inline]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn initial() -> Self {
        use Role::*;

        let mut board = Board::empty();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (f, r) in File::iter().zip(back) {
            board.set(Square::new(f, Rank::First), Some(Piece::new(r, Color::White)));
            board.set(Square::new(f, Rank::Second), Some(Piece::new(Pawn, Color::White)));
            board.set(Square::new(f, Rank::Seventh), Some(Piece::new(Pawn, Color::Black)));
            board.set(Square::new(f, Rank::Eighth), Some(Piece::new(r, Color::Black)));
        }

        board
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// The [`Color`] of the piece on the given [`Square`], if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(|p| p.color())
    }

    /// Places a piece on a square, or clears it, returning what was there before.
    #[inline]
    pub fn set(&mut self, sq: Square, p: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.row() as usize][sq.col() as usize], p)
    }

    /// An iterator over all pieces on the board.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(move |sq| self.piece_on(sq).map(|p| (p, sq)))
    }

    /// [`Square`]s occupied by a [`Color`].
    #[inline]
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(p, _)| p.color() == c)
            .map(|(_, sq)| sq)
    }

    /// [`Square`]s occupied by a [`Piece`].
    #[inline]
    pub fn by_piece(&self, p: Piece) -> impl Iterator<Item = Square> + '_ {
        self.iter().filter(move |(q, _)| *q == p).map(|(_, sq)| sq)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row() as usize][sq.col() as usize]
    }
}

/// Prints the piece placement field of the [FEN] notation.
///
/// The alternate form `{:#}` prints a diagram of the board instead.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.diagram(f);
        }

        for (i, row) in self.squares.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut skip = 0;
            for sq in row {
                match sq {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{}", skip)?;
                            skip = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }
        }

        Ok(())
    }
}

impl Board {
    fn diagram(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        for (rank, row) in Rank::iter().rev().zip(&self.squares) {
            write!(f, " {} |", rank)?;

            for sq in row {
                match sq {
                    Some(p) => write!(f, " {:#} |", p)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse board, expected eight ranks separated by `/`")]
    #[from(ignore)]
    WrongNumberOfRanks,
    #[display(fmt = "failed to parse board, every rank must span exactly eight squares")]
    #[from(ignore)]
    WrongRankLength,
    #[display(fmt = "failed to parse board")]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::WrongNumberOfRanks);
        }

        let mut board = Board::empty();
        for (row, segment) in board.squares.iter_mut().zip(rows) {
            let mut col = 0;
            for c in segment.chars() {
                match c.to_digit(10) {
                    Some(skip @ 1..=8) => col += skip as usize,
                    _ => {
                        let mut buffer = [0; 4];
                        let p = c.encode_utf8(&mut buffer).parse()?;
                        match row.get_mut(col) {
                            Some(sq) => *sq = Some(p),
                            None => return Err(ParseBoardError::WrongRankLength),
                        }

                        col += 1;
                    }
                }

                if col > 8 {
                    return Err(ParseBoardError::WrongRankLength);
                }
            }

            if col != 8 {
                return Err(ParseBoardError::WrongRankLength);
            }
        }

        Ok(board)
    }
}
