use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use thiserror::Error;

/// Side length of the board.
pub const BOARD_SIZE: i8 = 8;

/// A board coordinate, `(row, col)`, row-major with row 0 = black's back rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff the coordinate lies on the 8x8 board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Row-major index into a flat 64-square array.
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.in_bounds());
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCoordError {
    #[error("expected two characters like `e2`, got {0:?}")]
    Length(String),
    #[error("file must be a-h, got {0:?}")]
    File(char),
    #[error("rank must be 1-8, got {0:?}")]
    Rank(char),
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse algebraic notation: `a1` is white's queen-side corner (7, 0),
    /// `h8` is (0, 7).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(ParseCoordError::Length(s.to_string())),
        };
        let col = file as i32 - 'a' as i32;
        if !(0..BOARD_SIZE as i32).contains(&col) {
            return Err(ParseCoordError::File(file));
        }
        let rank_idx = rank as i32 - '1' as i32;
        if !(0..BOARD_SIZE as i32).contains(&rank_idx) {
            return Err(ParseCoordError::Rank(rank));
        }
        Ok(Coord::new(
            BOARD_SIZE - 1 - rank_idx as i8,
            col as i8,
        ))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col as u8) as char,
            BOARD_SIZE - self.row
        )
    }
}
