//! Exhaustive mate detection: try every candidate move of the checked color.

use log::debug;

use crate::board::Board;
use crate::coord::{Coord, BOARD_SIZE};
use crate::piece::Color;

use super::movegen::legal_moves;

/// True iff `color`, whose king has just been found in check, has no move
/// that escapes it. Sets the board's persistent checkmate flag when so.
///
/// Every candidate of every piece is probed in simulation mode as an
/// apply/inverse pair; a successful apply means the king escapes. The checked
/// color is pinned as the active color for the duration: the executor's
/// self-check scan tests the active color's king, so an inverse probe that
/// would relocate an enemy piece while the check stands is rejected rather
/// than committed. The scan is deliberately brute force: a snapshot of the
/// board is taken up front and restored before returning, so trial damage
/// never persists.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    let snapshot = board.clone();
    board.set_active_color(color);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Coord::new(row, col);
            match board.occupant(from) {
                Some(p) if p.color == color => {}
                _ => continue,
            }

            for to in legal_moves(board, from) {
                let escaped = board.attempt_move(from, to, true);
                board.attempt_move(to, from, true);
                if escaped {
                    debug!("{color} escapes check with {from} -> {to}");
                    *board = snapshot;
                    return false;
                }
            }
        }
    }

    *board = snapshot;
    board.mark_checkmate();
    true
}
