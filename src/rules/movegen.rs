//! Per-piece move scanning.
//!
//! Two modes share the same walks: `Moves` collects a piece's legal
//! destinations, `Coverage` records every square the piece controls for check
//! tests, including squares held by friendly pieces (a king may not capture a
//! defended piece).

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceKind, KING_STEPS, KNIGHT_DELTAS};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScanMode {
    /// Destinations the piece may legally move to.
    Moves,
    /// Squares the piece controls, for check tests.
    Coverage,
}

/// Legal destinations for the piece on `from`; empty if the square is empty.
///
/// Always a fresh scan of the current board, never a cached read.
pub fn legal_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let mut out = Vec::new();
    if let Some(piece) = board.occupant(from) {
        scan_piece(board, &piece, ScanMode::Moves, &mut |c| out.push(c));
    }
    out
}

/// Run the scan for one piece, feeding each destination to `sink`.
pub fn scan_piece(board: &Board, piece: &Piece, mode: ScanMode, sink: &mut dyn FnMut(Coord)) {
    match piece.kind {
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            for &dir in piece.kind.slide_dirs() {
                walk_ray(board, piece, dir, mode, sink);
            }
        }
        PieceKind::Knight => step_targets(board, piece, &KNIGHT_DELTAS, mode, sink),
        PieceKind::King => {
            step_targets(board, piece, &KING_STEPS, mode, sink);
            if mode == ScanMode::Moves && !piece.has_moved {
                castle_destinations(board, piece, sink);
            }
        }
        PieceKind::Pawn => scan_pawn(board, piece, mode, sink),
    }
}

/// Walk one sliding direction until the edge or a blocker.
///
/// An enemy blocker is a capture and terminates the walk; a friendly blocker
/// terminates it and is recorded only in coverage mode.
fn walk_ray(
    board: &Board,
    piece: &Piece,
    dir: Coord,
    mode: ScanMode,
    sink: &mut dyn FnMut(Coord),
) {
    let mut cur = piece.pos + dir;
    while cur.in_bounds() {
        match board.occupant(cur) {
            None => sink(cur),
            Some(other) if other.color != piece.color => {
                sink(cur);
                return;
            }
            Some(_) => {
                if mode == ScanMode::Coverage {
                    sink(cur);
                }
                return;
            }
        }
        cur += dir;
    }
}

/// Fixed-offset destinations for knights and kings, with the same
/// empty/enemy/friendly classification as the sliding walk.
fn step_targets(
    board: &Board,
    piece: &Piece,
    deltas: &[Coord],
    mode: ScanMode,
    sink: &mut dyn FnMut(Coord),
) {
    for &delta in deltas {
        let dst = piece.pos + delta;
        if !dst.in_bounds() {
            continue;
        }
        match board.occupant(dst) {
            None => sink(dst),
            Some(other) if other.color != piece.color => sink(dst),
            Some(_) => {
                if mode == ScanMode::Coverage {
                    sink(dst);
                }
            }
        }
    }
}

fn scan_pawn(board: &Board, piece: &Piece, mode: ScanMode, sink: &mut dyn FnMut(Coord)) {
    let forward = Coord::new(piece.color.pawn_dir(), 0);

    // Forward pushes land only on empty squares and stop at the first
    // occupied one. A pawn does not attack ahead, so pushes are never
    // recorded as coverage.
    if mode == ScanMode::Moves {
        let mut dst = piece.pos + forward;
        let mut range = piece.pawn_range;
        while range > 0 && dst.in_bounds() && board.occupant(dst).is_none() {
            sink(dst);
            dst += forward;
            range -= 1;
        }
    }

    // Diagonal captures: only onto enemy-occupied squares. An empty diagonal
    // is neither a move nor a covered square.
    for dc in [-1, 1] {
        let dst = piece.pos + Coord::new(piece.color.pawn_dir(), dc);
        if !dst.in_bounds() {
            continue;
        }
        if let Some(other) = board.occupant(dst) {
            if other.color != piece.color {
                sink(dst);
            }
        }
    }
}

/// Append castling destinations for an unmoved king on its start square.
///
/// Eligibility: the matching rook is present, same color, unmoved, and the
/// squares strictly between king and rook are empty. Whether the king's
/// transit or destination square is under attack is not examined here; a
/// castle into check is caught by the executor's self-check rollback, a
/// castle through check is permitted.
fn castle_destinations(board: &Board, piece: &Piece, sink: &mut dyn FnMut(Coord)) {
    let rank = piece.color.back_rank();
    if piece.pos != Coord::new(rank, 4) {
        return;
    }

    // King side: rook on file h, f and g empty.
    if rook_ready(board, piece, Coord::new(rank, 7))
        && board.occupant(Coord::new(rank, 5)).is_none()
        && board.occupant(Coord::new(rank, 6)).is_none()
    {
        sink(Coord::new(rank, 6));
    }

    // Queen side: rook on file a, b through d empty.
    if rook_ready(board, piece, Coord::new(rank, 0))
        && board.occupant(Coord::new(rank, 1)).is_none()
        && board.occupant(Coord::new(rank, 2)).is_none()
        && board.occupant(Coord::new(rank, 3)).is_none()
    {
        sink(Coord::new(rank, 2));
    }
}

fn rook_ready(board: &Board, king: &Piece, at: Coord) -> bool {
    matches!(
        board.occupant(at),
        Some(p) if p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
    )
}
