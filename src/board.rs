use std::fmt;

use log::{debug, info};

use crate::coord::{Coord, BOARD_SIZE};
use crate::piece::{Color, Piece, PieceKind};
use crate::rules::attacks::{coverage, SquareSet};
use crate::rules::checkmate::is_checkmate;
use crate::rules::movegen::legal_moves;

/// One square of the grid: a fixed shade plus an optional occupant.
///
/// The shade follows the usual checker pattern, derived from coordinate
/// parity; it matters only to a drawing layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    pub shade: Color,
    pub occupant: Option<Piece>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CastleSide {
    KingSide,
    QueenSide,
}

/// The 8x8 board, stored as a flat row-major array with row 0 = black's back
/// rank.
///
/// The board is the sole owner of its squares and pieces. All mutation goes
/// through [`Board::attempt_move`]; a piece's stored position is a cache this
/// type keeps in sync on every relocation, castling included.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Square; 64],
    active: Color,
    white_king: Coord,
    black_king: Coord,
    white_covered: SquareSet,
    black_covered: SquareSet,
    white_in_check: bool,
    black_in_check: bool,
    checkmate: bool,
}

impl Board {
    /// The standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_pieces(Color::White, &starting_pieces())
    }

    /// Build a board from an explicit piece list, for analysis and tests.
    ///
    /// Panics if two pieces share a square or either king is missing:
    /// exactly one king per color must exist at all times.
    pub fn from_pieces(active: Color, pieces: &[Piece]) -> Self {
        let mut squares = empty_squares();
        let mut white_king = None;
        let mut black_king = None;

        for &piece in pieces {
            assert!(piece.pos.in_bounds(), "piece off the board: {piece:?}");
            let slot = &mut squares[piece.pos.index()];
            assert!(
                slot.occupant.is_none(),
                "two pieces on {}: {piece:?}",
                piece.pos
            );
            slot.occupant = Some(piece);

            if piece.kind == PieceKind::King {
                let cache = match piece.color {
                    Color::White => &mut white_king,
                    Color::Black => &mut black_king,
                };
                assert!(cache.is_none(), "two {} kings", piece.color);
                *cache = Some(piece.pos);
            }
        }

        Self {
            squares,
            active,
            white_king: white_king.expect("white king required"),
            black_king: black_king.expect("black king required"),
            white_covered: SquareSet::EMPTY,
            black_covered: SquareSet::EMPTY,
            white_in_check: false,
            black_in_check: false,
            checkmate: false,
        }
    }

    /// The square at `at`, or `None` off the board.
    pub fn square(&self, at: Coord) -> Option<&Square> {
        if at.in_bounds() {
            Some(&self.squares[at.index()])
        } else {
            None
        }
    }

    /// The occupant of `at`, if any; `None` off the board. Pieces are plain
    /// value types, so this hands out a copy; mutation stays internal to the
    /// board.
    #[inline]
    pub fn occupant(&self, at: Coord) -> Option<Piece> {
        if !at.in_bounds() {
            return None;
        }
        self.squares[at.index()].occupant
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .filter_map(move |s| s.occupant.filter(|p| p.color == color))
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// The checkmate scanner pins the checked color as active around its
    /// simulated trials; the self-check scan below always tests the active
    /// color's king.
    pub(crate) fn set_active_color(&mut self, color: Color) {
        self.active = color;
    }

    #[inline]
    pub fn inactive_color(&self) -> Color {
        self.active.other()
    }

    pub fn king_pos(&self, color: Color) -> Coord {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// The covered-square set last rebuilt for `color`. Valid only
    /// immediately after [`Board::scan_check`]; stale after any mutation.
    pub fn covered(&self, color: Color) -> SquareSet {
        match color {
            Color::White => self.white_covered,
            Color::Black => self.black_covered,
        }
    }

    /// Check flag last recorded for `color` by [`Board::scan_check`].
    pub fn in_check(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_in_check,
            Color::Black => self.black_in_check,
        }
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    pub(crate) fn mark_checkmate(&mut self) {
        self.checkmate = true;
    }

    /// Rebuild both coverage sets, then test `color`'s king square against
    /// the opponent's set. Updates the per-color check flag and returns it.
    pub fn scan_check(&mut self, color: Color) -> bool {
        let white = coverage(self, Color::White);
        let black = coverage(self, Color::Black);
        self.white_covered = white;
        self.black_covered = black;

        let checked = self.covered(color.other()).contains(self.king_pos(color));
        match color {
            Color::White => self.white_in_check = checked,
            Color::Black => self.black_in_check = checked,
        }
        if checked {
            debug!("{color} king is in check on {}", self.king_pos(color));
        }
        checked
    }

    /// Validate and apply a move. Returns true iff the move was committed.
    ///
    /// Non-simulation calls enforce turn ownership and legal-set membership,
    /// notify check/checkmate for the opponent, and flip the turn. Simulation
    /// calls skip ownership and membership (the checkmate scanner's inverse
    /// probes are not legal moves) and never flip the turn; the scanner sets
    /// the checked color active around its trials instead.
    ///
    /// A move that leaves the active color's king in check is rolled back
    /// completely, castling included, and reported as a plain rejection.
    pub fn attempt_move(&mut self, start: Coord, end: Coord, simulation: bool) -> bool {
        if start == end || !start.in_bounds() || !end.in_bounds() {
            return false;
        }
        let piece = match self.occupant(start) {
            Some(p) => p,
            None => return false,
        };
        if !simulation {
            if piece.color != self.active {
                debug!("rejected {start} -> {end}: not {}'s piece", self.active);
                return false;
            }
            if !legal_moves(self, start).contains(&end) {
                debug!("rejected {start} -> {end}: not a legal destination");
                return false;
            }
        }

        let saved_target = self.occupant(end);
        let castle = self.castle_side(&piece, end);

        match castle {
            Some(side) => self.castle(piece.color, side),
            None => self.relocate(start, end),
        }

        // A move may not leave the active color's king in check. For
        // committed moves the mover is the active color; in simulation the
        // checkmate scanner keeps the checked color active, so an inverse
        // probe that would drag an enemy piece back over the checked side's
        // material is rejected while the check stands.
        if self.scan_check(self.active) {
            match castle {
                Some(side) => self.undo_castle(piece.color, side),
                None => {
                    self.relocate(end, start);
                    self.squares[end.index()].occupant = saved_target;
                }
            }
            return false;
        }

        if let Some(moved) = self.squares[end.index()].occupant.as_mut() {
            match moved.kind {
                PieceKind::Pawn => moved.pawn_range = 1,
                PieceKind::King | PieceKind::Rook => moved.has_moved = true,
                _ => {}
            }
        }

        if !simulation {
            let opponent = piece.color.other();
            if self.scan_check(opponent) {
                info!("{opponent} king is in check");
                if is_checkmate(self, opponent) {
                    info!("checkmate: {opponent} has no legal reply");
                }
            }
            self.active = self.active.other();
        }
        true
    }

    /// Recognize a castling request: an unmoved king on its start square
    /// heading for the g or c file of its back rank.
    fn castle_side(&self, piece: &Piece, end: Coord) -> Option<CastleSide> {
        if piece.kind != PieceKind::King || piece.has_moved {
            return None;
        }
        let rank = piece.color.back_rank();
        if piece.pos != Coord::new(rank, 4) {
            return None;
        }
        if end == Coord::new(rank, 6) {
            Some(CastleSide::KingSide)
        } else if end == Coord::new(rank, 2) {
            Some(CastleSide::QueenSide)
        } else {
            None
        }
    }

    fn castle_squares(color: Color, side: CastleSide) -> (Coord, Coord, Coord, Coord) {
        let rank = color.back_rank();
        match side {
            CastleSide::KingSide => (
                Coord::new(rank, 4),
                Coord::new(rank, 6),
                Coord::new(rank, 7),
                Coord::new(rank, 5),
            ),
            CastleSide::QueenSide => (
                Coord::new(rank, 4),
                Coord::new(rank, 2),
                Coord::new(rank, 0),
                Coord::new(rank, 3),
            ),
        }
    }

    /// Compound castling relocation: king two squares toward the rook, rook
    /// to the square the king passed over, both flagged as moved.
    fn castle(&mut self, color: Color, side: CastleSide) {
        let (king_from, king_to, rook_from, rook_to) = Self::castle_squares(color, side);
        self.relocate(king_from, king_to);
        self.relocate(rook_from, rook_to);
        self.set_has_moved(king_to, true);
        self.set_has_moved(rook_to, true);
    }

    /// Reverse a castle in full: both pieces return to their squares and
    /// both flags clear (they were unmoved, or the castle was ineligible).
    fn undo_castle(&mut self, color: Color, side: CastleSide) {
        let (king_from, king_to, rook_from, rook_to) = Self::castle_squares(color, side);
        self.relocate(king_to, king_from);
        self.relocate(rook_to, rook_from);
        self.set_has_moved(king_from, false);
        self.set_has_moved(rook_from, false);
    }

    /// Move the occupant of `from` onto `to`, overwriting `to`, re-syncing
    /// the piece's cached position and, for kings, the board's king cache.
    fn relocate(&mut self, from: Coord, to: Coord) {
        if let Some(mut piece) = self.squares[from.index()].occupant.take() {
            piece.pos = to;
            if piece.kind == PieceKind::King {
                match piece.color {
                    Color::White => self.white_king = to,
                    Color::Black => self.black_king = to,
                }
            }
            self.squares[to.index()].occupant = Some(piece);
        }
    }

    fn set_has_moved(&mut self, at: Coord, value: bool) {
        if let Some(piece) = self.squares[at.index()].occupant.as_mut() {
            piece.has_moved = value;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let glyph = match self.occupant(Coord::new(row, col)) {
                    Some(p) if p.color == Color::White => p.kind.letter(),
                    Some(p) => p.kind.letter().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

fn empty_squares() -> [Square; 64] {
    let mut squares = [Square {
        shade: Color::White,
        occupant: None,
    }; 64];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if (row + col) % 2 != 0 {
                squares[Coord::new(row, col).index()].shade = Color::Black;
            }
        }
    }
    squares
}

fn starting_pieces() -> Vec<Piece> {
    use PieceKind::*;
    let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

    let mut pieces = Vec::with_capacity(32);
    for color in [Color::Black, Color::White] {
        let rank = color.back_rank();
        for col in 0..BOARD_SIZE {
            pieces.push(Piece::new(
                Pawn,
                color,
                Coord::new(rank + color.pawn_dir(), col),
            ));
        }
        for (col, &kind) in back.iter().enumerate() {
            pieces.push(Piece::new(kind, color, Coord::new(rank, col as i8)));
        }
    }
    pieces
}
