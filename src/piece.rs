use std::fmt;

use crate::coord::Coord;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by. Rows grow towards white's
    /// side, so white pawns move in -1 and black pawns in +1.
    #[inline]
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The back rank row, where the king and rooks start.
    #[inline]
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Unit directions for sliding pieces; empty for the rest.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            King => 'K',
            Queen => 'Q',
            Rook => 'R',
            Bishop => 'B',
            Knight => 'N',
            Pawn => 'P',
        }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(0, -1),
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(-1, -1),
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord::new(1, 0),
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(0, -1),
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, 1),
    Coord::new(-1, -1),
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord::new(-2, -1),
    Coord::new(-2, 1),
    Coord::new(-1, -2),
    Coord::new(-1, 2),
    Coord::new(1, -2),
    Coord::new(1, 2),
    Coord::new(2, -1),
    Coord::new(2, 1),
];

pub const KING_STEPS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
];

/// One piece on the board.
///
/// `pos` is a cache maintained by the board: it always equals the coordinates
/// of the square holding the piece.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub pos: Coord,
    /// Meaningful for King and Rook: gates castling eligibility.
    pub has_moved: bool,
    /// Meaningful for Pawn: 2 until the first move, then permanently 1.
    pub pawn_range: i8,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, pos: Coord) -> Self {
        Self {
            kind,
            color,
            pos,
            has_moved: false,
            pawn_range: 2,
        }
    }
}
