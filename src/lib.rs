//! A rules engine for standard chess: board state, per-piece legal-move
//! generation, check detection and exhaustive checkmate scanning.
//!
//! Rendering, input handling and the event loop live elsewhere; everything
//! here is headless and synchronous. A front end drives the engine through
//! [`game::Game`] and never mutates board state directly.

pub mod board;
pub mod coord;
pub mod game;
pub mod piece;
pub mod rules;
