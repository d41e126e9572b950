//! Game-level rules: terminal positions, en passant safety, and make/undo
//! symmetry along random games.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use chess_core::{
    Board, CastleRights, Color, GameState, Move, Piece, PieceKind, Square, detect, is_attacked,
};

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn play(state: &mut GameState, moves: &[&str]) {
    for text in moves {
        let mv = state
            .parse_move(text)
            .unwrap_or_else(|e| panic!("{text} should be legal: {e}"));
        state.make_move(mv);
    }
}

// =============================================================================
// Checkmate / stalemate
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    let moves = state.legal_moves();
    assert!(moves.is_empty(), "White has no answer to Qh4#");
    assert!(state.in_check());
    assert!(state.checkmate());
    assert!(!state.stalemate());
    assert_eq!(state.side_to_move(), Color::White);
}

#[test]
fn test_undo_clears_checkmate() {
    let mut state = GameState::new();
    play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    state.legal_moves();
    assert!(state.checkmate());

    state.undo_move();
    assert!(!state.checkmate());
    assert!(!state.stalemate());
    assert!(!state.legal_moves().is_empty());
}

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let mut state =
        GameState::from_placement("k7/2K5/1Q6/8/8/8/8/8", Color::Black, CastleRights::NONE, None)
            .unwrap();

    let moves = state.legal_moves();
    assert!(moves.is_empty(), "Stalemate position should have no legal moves");
    assert!(state.stalemate());
    assert!(!state.checkmate());
    assert!(!state.in_check());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let mut state =
        GameState::from_placement("6k1/6P1/6K1/8/8/8/8/8", Color::Black, CastleRights::NONE, None)
            .unwrap();
    assert!(state.legal_moves().is_empty());
    assert!(state.stalemate());
}

#[test]
fn test_check_is_not_checkmate() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "f7f5", "d1h5"]);
    let moves = state.legal_moves();
    assert!(state.in_check());
    assert!(!moves.is_empty());
    assert!(!state.checkmate());
    assert!(moves.iter().any(|m| m.notation() == "g7g6"));
    assert!(moves.iter().all(|m| m.notation() != "e8f7"));
}

// =============================================================================
// En passant and discovered rank checks
// =============================================================================

fn after_black_double_push(placement: &str) -> GameState {
    let mut state =
        GameState::from_placement(placement, Color::Black, CastleRights::NONE, None).unwrap();
    play(&mut state, &["c7c5"]);
    assert_eq!(state.en_passant_target(), Some(sq("c6")));
    state
}

#[test]
fn test_en_passant_rejected_when_it_opens_the_rank() {
    // King a5, pawns b5/c5, rook h5: bxc6 would empty both pawn squares
    let mut state = after_black_double_push("7k/2p5/8/KP5r/8/8/8/8");
    let moves = state.legal_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant));
    assert!(moves.iter().any(|m| m.notation() == "b5b6"));
}

#[test]
fn test_en_passant_allowed_without_rank_attacker() {
    let mut state = after_black_double_push("7k/2p5/8/KP6/8/8/8/8");
    let moves = state.legal_moves();
    let ep: Vec<&Move> = moves.iter().filter(|m| m.is_en_passant).collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].notation(), "b5c6");
}

#[test]
fn test_en_passant_allowed_when_rank_stays_blocked() {
    let mut state = after_black_double_push("7k/2p5/8/KP2N2r/8/8/8/8");
    let moves = state.legal_moves();
    assert!(moves.iter().any(|m| m.is_en_passant));
}

#[test]
fn test_en_passant_rejected_when_it_opens_a_diagonal() {
    // Bishop b7 looks down the diagonal at the f3 king through d5 and e4;
    // exd6 would remove the d5 pawn and leave the king in check
    let mut state = GameState::from_placement(
        "7k/1b1p4/8/4P3/8/5K2/8/8",
        Color::Black,
        CastleRights::NONE,
        None,
    )
    .unwrap();
    play(&mut state, &["d7d5"]);
    assert_eq!(state.en_passant_target(), Some(sq("d6")));

    let moves = state.legal_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant));
    assert!(moves.iter().any(|m| m.notation() == "e5e6"));
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut state = after_black_double_push("7k/2p5/8/KP6/8/8/8/8");
    play(&mut state, &["a5a4", "h8g8"]);
    assert!(state.legal_moves().iter().all(|m| !m.is_en_passant));
}

// =============================================================================
// Random playouts: make/undo symmetry and per-position invariants
// =============================================================================

#[derive(Debug, PartialEq)]
struct Snapshot {
    board: Board,
    side: Color,
    kings: [Square; 2],
    rights: CastleRights,
    en_passant: Option<Square>,
    history_len: usize,
}

fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        board: state.board().clone(),
        side: state.side_to_move(),
        kings: [
            state.king_square(Color::White),
            state.king_square(Color::Black),
        ],
        rights: state.castle_rights(),
        en_passant: state.en_passant_target(),
        history_len: state.move_history().len(),
    }
}

fn assert_material_sane(board: &Board) {
    for color in [Color::White, Color::Black] {
        let king = Piece::new(color, PieceKind::King);
        assert_eq!(board.count(king), 1, "{color} must have exactly one king");
        assert_eq!(
            board.king_square(color).ok(),
            board.pieces().find(|&(_, p)| p == king).map(|(s, _)| s)
        );
        assert!(board.count(Piece::new(color, PieceKind::Pawn)) <= 8);
        let total = board.pieces().filter(|(_, p)| p.color == color).count();
        assert!(total <= 16, "{color} has {total} pieces");
    }
}

#[test]
fn test_make_undo_symmetry_along_random_games() {
    let mut rng = StdRng::seed_from_u64(0xC4E55);

    for _game in 0..24 {
        let mut state = GameState::new();
        for _ply in 0..40 {
            assert_material_sane(state.board());
            let info = detect(&state);
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            if info.is_double_check() {
                assert!(
                    moves.iter().all(|m| m.piece_moved.kind == PieceKind::King),
                    "double check must leave only king moves"
                );
            }

            let before = snapshot(&state);
            let mover = state.side_to_move();
            for &mv in &moves {
                state.make_move(mv);
                assert!(
                    !is_attacked(state.board(), state.king_square(mover), mover),
                    "{} leaves the {mover} king in check",
                    mv.notation()
                );
                assert_eq!(state.board().king_square(mover), Ok(state.king_square(mover)));
                state.undo_move();
                assert_eq!(snapshot(&state), before, "undo of {} diverged", mv.notation());
            }

            let &choice = moves.choose(&mut rng).unwrap();
            state.make_move(choice);
        }

        // Unwind the whole game and land back on the initial position
        while state.undo_move().is_some() {}
        assert_eq!(snapshot(&state), snapshot(&GameState::new()));
    }
}
