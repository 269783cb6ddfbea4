//! Per-color coverage, rebuilt from scratch before every check test.

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Color;

use super::movegen::{scan_piece, ScanMode};

/// A set of board squares packed into a single `u64`, bit i = row-major
/// square i. Cheap to clear, copy and compare.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, c: Coord) {
        self.0 |= 1u64 << c.index();
    }

    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        (self.0 >> c.index()) & 1 == 1
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (0..64u8)
            .filter(move |i| (self.0 >> i) & 1 == 1)
            .map(|i| Coord::new((i / 8) as i8, (i % 8) as i8))
    }
}

/// Rebuild `color`'s covered-square set by scanning every piece of that color
/// in coverage mode.
///
/// The result is valid only for the board state it was computed from; any
/// mutation makes it stale. Callers rebuild both colors before a check test,
/// because one move can change the squares either color controls.
pub fn coverage(board: &Board, color: Color) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for piece in board.pieces_of(color) {
        scan_piece(board, &piece, ScanMode::Coverage, &mut |c| set.insert(c));
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_set_basics() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Coord::new(0, 0));
        set.insert(Coord::new(7, 7));
        set.insert(Coord::new(7, 7));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Coord::new(7, 7)));
        assert!(!set.contains(Coord::new(3, 3)));
        let squares: Vec<Coord> = set.iter().collect();
        assert_eq!(squares, vec![Coord::new(0, 0), Coord::new(7, 7)]);
    }
}
