//! Minimal terminal front end driving the engine's public surface.
//!
//! Moves are entered as two algebraic squares, e.g. `e2 e4`. Run with
//! `RUST_LOG=info` to see check and checkmate notifications.

use std::io::{self, BufRead, Write};

use classic_chess::coord::Coord;
use classic_chess::game::Game;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut out = io::stdout();

    loop {
        writeln!(out, "{}\n", game.board())?;
        if game.is_game_over() {
            writeln!(out, "game over")?;
            return Ok(());
        }

        write!(out, "{} to move> ", game.active_color())?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parts = line.split_whitespace();
        let (from, to) = match (parts.next(), parts.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                writeln!(out, "enter a move as two squares, e.g. `e2 e4`")?;
                continue;
            }
        };
        let (from, to) = match (from.parse::<Coord>(), to.parse::<Coord>()) {
            (Ok(f), Ok(t)) => (f, t),
            (Err(e), _) | (_, Err(e)) => {
                writeln!(out, "bad square: {e}")?;
                continue;
            }
        };

        if !game.submit_move(from, to) {
            writeln!(out, "illegal move")?;
        }
    }
}
