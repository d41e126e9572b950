use super::*;
use crate::board::CastleRights;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn state(placement: &str, side: Color, rights: CastleRights) -> GameState {
    GameState::from_placement(placement, side, rights, None).unwrap()
}

fn notations(moves: &[Move]) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(Move::notation).collect();
    out.sort();
    out
}

#[test]
fn test_startpos_moves() {
    let mut pos = GameState::new();
    let moves = legal_moves(&mut pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(!pos.in_check());
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let mut pos = state(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        Color::White,
        CastleRights::ALL,
    );
    let moves = legal_moves(&mut pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_pinned_bishop_slides_along_pin() {
    let mut pos = state("4k3/8/8/b7/8/8/3B4/4K3", Color::White, CastleRights::NONE);
    let bishop_moves: Vec<Move> = legal_moves(&mut pos)
        .into_iter()
        .filter(|m| m.start == sq("d2"))
        .collect();
    assert_eq!(notations(&bishop_moves), vec!["d2a5", "d2b4", "d2c3"]);
}

#[test]
fn test_rook_pinned_on_diagonal_cannot_move() {
    let mut pos = state("4k3/8/8/b7/8/8/3R4/4K3", Color::White, CastleRights::NONE);
    assert!(legal_moves(&mut pos).iter().all(|m| m.start != sq("d2")));
}

#[test]
fn test_pawn_pinned_on_file_pushes_but_cannot_capture() {
    let mut pos = state("4k3/4r3/8/8/8/5b2/4P3/4K3", Color::White, CastleRights::NONE);
    let pawn_moves: Vec<Move> = legal_moves(&mut pos)
        .into_iter()
        .filter(|m| m.start == sq("e2"))
        .collect();
    assert_eq!(notations(&pawn_moves), vec!["e2e3", "e2e4"]);
}

#[test]
fn test_pinned_knight_has_no_moves() {
    let mut pos = state("4k3/4r3/8/8/8/8/4N3/4K3", Color::White, CastleRights::NONE);
    assert!(legal_moves(&mut pos).iter().all(|m| m.start != sq("e2")));
}

#[test]
fn test_double_check_allows_only_king_moves() {
    let mut pos = state("4k3/8/8/8/8/3n4/8/R3K2r", Color::White, CastleRights::NONE);
    let moves = legal_moves(&mut pos);
    assert!(pos.in_check());
    assert_eq!(notations(&moves), vec!["e1d2", "e1e2"]);
}

#[test]
fn test_single_check_block_capture_or_step_aside() {
    let mut pos = state("4k3/8/8/8/8/8/6B1/4K2r", Color::White, CastleRights::NONE);
    let moves = legal_moves(&mut pos);
    assert!(pos.in_check());
    assert_eq!(
        notations(&moves),
        vec!["e1d2", "e1e2", "e1f2", "g2f1", "g2h1"]
    );
}

#[test]
fn test_no_castling_through_attacked_square() {
    let mut pos = state("4k3/8/8/8/8/8/5r2/R3K2R", Color::White, CastleRights::ALL);
    let castles: Vec<Move> = legal_moves(&mut pos)
        .into_iter()
        .filter(|m| m.is_castle)
        .collect();
    assert_eq!(notations(&castles), vec!["e1c1"]);
}

#[test]
fn test_queenside_castle_ignores_attacked_b_file() {
    let mut pos = state("1r2k3/8/8/8/8/8/8/R3K3", Color::White, CastleRights::ALL);
    let moves = legal_moves(&mut pos);
    assert!(moves.iter().any(|m| m.is_castle && m.end == sq("c1")));
}

#[test]
fn test_no_castling_out_of_check() {
    let mut pos = state("4r1k1/8/8/8/8/8/8/R3K2R", Color::White, CastleRights::ALL);
    let moves = legal_moves(&mut pos);
    assert!(pos.in_check());
    assert!(moves.iter().all(|m| !m.is_castle));
}

#[test]
fn test_castling_needs_rights() {
    let rights = CastleRights {
        white_kingside: false,
        ..CastleRights::ALL
    };
    let mut pos = state("4k3/8/8/8/8/8/8/R3K2R", Color::White, rights);
    let castles: Vec<Move> = legal_moves(&mut pos)
        .into_iter()
        .filter(|m| m.is_castle)
        .collect();
    assert_eq!(notations(&castles), vec!["e1c1"]);
}

#[test]
fn test_en_passant_capture_of_checking_pawn() {
    // Black just played d7-d5 with check; exd6 e.p. removes the checker
    let mut pos = GameState::from_placement(
        "4k3/8/8/3pP3/4K3/8/8/8",
        Color::White,
        CastleRights::NONE,
        Some(sq("d6")),
    )
    .unwrap();
    let moves = legal_moves(&mut pos);
    assert!(pos.in_check());
    assert!(moves.iter().any(|m| m.is_en_passant && m.end == sq("d6")));
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let mut pos = GameState::new();
    let mut buf = vec![];
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(buf.len(), 20);
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(buf.len(), 20);
}
