use classic_chess::board::Board;
use classic_chess::coord::Coord;
use classic_chess::game::Game;
use classic_chess::piece::{Color, Piece, PieceKind};
use classic_chess::rules::attacks::coverage;
use classic_chess::rules::movegen::legal_moves;

fn sq(s: &str) -> Coord {
    s.parse().unwrap()
}

fn piece(kind: PieceKind, color: Color, at: &str) -> Piece {
    Piece::new(kind, color, sq(at))
}

fn kings(white: &str, black: &str) -> [Piece; 2] {
    [
        piece(PieceKind::King, Color::White, white),
        piece(PieceKind::King, Color::Black, black),
    ]
}

#[test]
fn pawn_range_shrinks_after_the_first_move() {
    let mut game = Game::new();
    assert_eq!(game.legal_destinations(sq("e2")), vec![sq("e3"), sq("e4")]);

    assert!(game.submit_move(sq("e2"), sq("e4")));
    assert!(game.submit_move(sq("a7"), sq("a6")));

    // One square from now on, permanently.
    assert_eq!(game.legal_destinations(sq("e4")), vec![sq("e5")]);
}

#[test]
fn blocked_pawns_have_no_forward_moves() {
    let mut pieces = kings("a1", "h8").to_vec();
    pieces.push(piece(PieceKind::Pawn, Color::White, "e4"));
    pieces.push(piece(PieceKind::Pawn, Color::Black, "e5"));
    let board = Board::from_pieces(Color::White, &pieces);

    assert!(legal_moves(&board, sq("e4")).is_empty());
    assert!(legal_moves(&board, sq("e5")).is_empty());
}

#[test]
fn pawn_captures_only_enemy_occupied_diagonals() {
    let mut pieces = kings("a1", "h8").to_vec();
    let mut pawn = piece(PieceKind::Pawn, Color::White, "e4");
    pawn.pawn_range = 1;
    pieces.push(pawn);
    pieces.push(piece(PieceKind::Rook, Color::Black, "d5"));
    let board = Board::from_pieces(Color::White, &pieces);

    let moves = legal_moves(&board, sq("e4"));
    assert!(moves.contains(&sq("e5")));
    assert!(moves.contains(&sq("d5")));
    // The other diagonal is empty: no capture-free advance there.
    assert!(!moves.contains(&sq("f5")));
    assert_eq!(moves.len(), 2);
}

#[test]
fn double_push_stops_at_the_first_occupied_square() {
    let mut pieces = kings("a1", "h8").to_vec();
    pieces.push(piece(PieceKind::Pawn, Color::White, "e2"));
    pieces.push(piece(PieceKind::Rook, Color::Black, "e4"));
    let board = Board::from_pieces(Color::White, &pieces);

    // Range is still 2, but the second square is occupied.
    assert_eq!(legal_moves(&board, sq("e2")), vec![sq("e3")]);
}

#[test]
fn opening_knight_jumps() {
    let game = Game::new();
    let moves = game.legal_destinations(sq("b1"));
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&sq("a3")));
    assert!(moves.contains(&sq("c3")));
}

#[test]
fn sliding_walks_stop_at_blockers() {
    let mut pieces = kings("a1", "h8").to_vec();
    pieces.push(piece(PieceKind::Rook, Color::White, "d4"));
    pieces.push(piece(PieceKind::Pawn, Color::White, "d6"));
    pieces.push(piece(PieceKind::Pawn, Color::Black, "g4"));
    let board = Board::from_pieces(Color::White, &pieces);

    let moves = legal_moves(&board, sq("d4"));
    // Up the file: d5 only, the friendly pawn on d6 is not a destination.
    assert!(moves.contains(&sq("d5")));
    assert!(!moves.contains(&sq("d6")));
    assert!(!moves.contains(&sq("d7")));
    // Along the rank: the enemy pawn is a capture and ends the walk.
    assert!(moves.contains(&sq("g4")));
    assert!(!moves.contains(&sq("h4")));

    // Coverage still records the friendly blocker as controlled.
    let covered = coverage(&board, Color::White);
    assert!(covered.contains(sq("d6")));
    assert!(!covered.contains(sq("d7")));
}

#[test]
fn empty_square_has_no_destinations() {
    let game = Game::new();
    assert!(game.legal_destinations(sq("e4")).is_empty());
}
