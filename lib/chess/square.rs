use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::{convert::TryFrom, str::FromStr};

/// A square on the chess board.
///
/// Besides its [`File`] and [`Rank`], a square is addressed by a pair of
/// zero-based coordinates `(row, col)`, where row 0 is the eighth rank and
/// column 0 is file `a`. Squares are always on the board, so bounds are
/// checked once, whenever coordinates are converted into a [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline]
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Whether the coordinates `(row, col)` lie on the board.
    #[inline]
    pub fn is_in_bounds(row: i8, col: i8) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    /// Constructs [`Square`] from a pair of coordinates, if they lie on the board.
    #[inline]
    pub fn from_coords(row: i8, col: i8) -> Option<Self> {
        if !Self::is_in_bounds(row, col) {
            return None;
        }

        let file = File::try_from(col as u8).ok()?;
        let rank = Rank::try_from(7 - row as u8).ok()?;
        Some(Square::new(file, rank))
    }

    /// This square's row, where row 0 is the eighth rank.
    #[inline]
    pub fn row(&self) -> u8 {
        7 - self.rank.index()
    }

    /// This square's column, where column 0 is file `a`.
    #[inline]
    pub fn col(&self) -> u8 {
        self.file.index()
    }

    /// The square `dr` rows and `dc` columns away, if it lies on the board.
    #[inline]
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        let row = (self.row() as i8).checked_add(dr)?;
        let col = (self.col() as i8).checked_add(dc)?;
        Self::from_coords(row, col)
    }

    /// Returns an iterator over all 64 [`Square`]s, row by row.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Rank::iter()
            .rev()
            .flat_map(|r| File::iter().map(move |f| Square::new(f, r)))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square")]
pub enum ParseSquareError {
    InvalidFile(ParseFileError),
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
