use log::debug;

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Color, Piece};
use crate::rules::movegen::legal_moves;

/// Turn alternation and game-over gating; every board mechanic is delegated.
///
/// This is the surface a rendering/input layer consumes: read-only queries
/// plus [`Game::submit_move`] as the single mutating entry point.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
}

impl Game {
    /// A fresh game from the standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// A game starting from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only occupant query, e.g. for drawing.
    pub fn occupant_at(&self, pos: Coord) -> Option<Piece> {
        self.board.occupant(pos)
    }

    /// Legal destinations of the piece on `pos`, e.g. for highlighting.
    /// Always a fresh generator run, never a cached read.
    pub fn legal_destinations(&self, pos: Coord) -> Vec<Coord> {
        legal_moves(&self.board, pos)
    }

    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    /// True once checkmate has been confirmed.
    pub fn is_game_over(&self) -> bool {
        self.board.checkmate()
    }

    /// The one mutating entry point. Refused outright once the game is over;
    /// otherwise an illegal move degrades to a rejected no-op.
    pub fn submit_move(&mut self, start: Coord, end: Coord) -> bool {
        if self.is_game_over() {
            debug!("rejected {start} -> {end}: game is over");
            return false;
        }
        self.board.attempt_move(start, end, false)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
