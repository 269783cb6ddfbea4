use classic_chess::board::Board;
use classic_chess::coord::{Coord, BOARD_SIZE};
use classic_chess::game::Game;
use classic_chess::piece::{Color, PieceKind};
use classic_chess::rules::attacks::coverage;

fn sq(s: &str) -> Coord {
    s.parse().unwrap()
}

fn all_coords() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
}

#[test]
fn white_has_twenty_opening_moves() {
    let game = Game::new();
    let mut pawn_moves = 0usize;
    let mut knight_moves = 0usize;
    let mut other_moves = 0usize;

    for from in all_coords() {
        let piece = match game.occupant_at(from) {
            Some(p) if p.color == Color::White => p,
            _ => continue,
        };
        let n = game.legal_destinations(from).len();
        match piece.kind {
            PieceKind::Pawn => pawn_moves += n,
            PieceKind::Knight => knight_moves += n,
            _ => other_moves += n,
        }
    }

    assert_eq!(pawn_moves, 16);
    assert_eq!(knight_moves, 4);
    assert_eq!(other_moves, 0);
}

#[test]
fn black_opening_coverage_stays_in_its_half() {
    let board = Board::new();
    let covered = coverage(&board, Color::Black);

    assert!(!covered.is_empty());
    for c in covered.iter() {
        // Knights reach row 2 at most; white's back rank is untouched.
        assert!(c.row <= 2, "black covers {c} from the starting position");
    }
    for col in 0..BOARD_SIZE {
        assert!(!covered.contains(Coord::new(7, col)));
    }
}

#[test]
fn coverage_includes_defended_friendly_squares() {
    let board = Board::new();
    let covered = coverage(&board, Color::White);

    // The king defends f1, the b1 knight defends the d2 pawn.
    assert!(covered.contains(sq("f1")));
    assert!(covered.contains(sq("d2")));
    // Pawn pushes are not coverage: e3 is reachable but only by a push.
    assert!(!covered.contains(sq("e4")));
}

#[test]
fn generation_is_idempotent() {
    let game = Game::new();
    for from in all_coords() {
        assert_eq!(game.legal_destinations(from), game.legal_destinations(from));
    }
}

#[test]
fn board_setup_matches_the_standard_position() {
    let board = Board::new();

    assert_eq!(board.active_color(), Color::White);
    assert_eq!(board.inactive_color(), Color::Black);
    assert_eq!(board.king_pos(Color::White), sq("e1"));
    assert_eq!(board.king_pos(Color::Black), sq("e8"));
    assert!(!board.checkmate());

    let total = all_coords().filter(|&c| board.occupant(c).is_some()).count();
    assert_eq!(total, 32);

    // Checker shades alternate; a1 is a dark square.
    assert_eq!(board.square(sq("a1")).unwrap().shade, Color::Black);
    assert_eq!(board.square(sq("b1")).unwrap().shade, Color::White);
    assert_eq!(board.square(sq("a2")).unwrap().shade, Color::White);
}

#[test]
fn out_of_bounds_queries_degrade_to_nothing() {
    let board = Board::new();
    let game = Game::new();

    for off in [Coord::new(-1, 0), Coord::new(0, 9), Coord::new(8, 8)] {
        assert!(board.square(off).is_none());
        assert!(board.occupant(off).is_none());
        assert!(game.legal_destinations(off).is_empty());
    }
}
