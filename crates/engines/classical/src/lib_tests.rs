use super::*;
use chess_core::{CastleRights, Color};

#[test]
fn classical_engine_returns_legal_move() {
    let mut engine = ClassicalEngine::with_seed(1);
    let pos = GameState::new();

    let result = engine.search(&pos, SearchLimits::depth(2));

    let best = result.best_move.expect("startpos has moves");
    let mut copy = pos.clone();
    assert!(copy.legal_moves().contains(&best));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 20);
}

#[test]
fn classical_engine_leaves_caller_state_alone() {
    let mut engine = ClassicalEngine::with_seed(2);
    let mut pos = GameState::new();
    let mv = pos.parse_move("e2e4").unwrap();
    pos.make_move(mv);

    engine.search(&pos, SearchLimits::depth(2));

    assert_eq!(pos.move_history().len(), 1);
    assert_eq!(pos.side_to_move(), Color::Black);
}

#[test]
fn classical_engine_reports_mate_when_no_moves() {
    let mut engine = ClassicalEngine::with_seed(3);
    let pos =
        GameState::from_placement("R5k1/5ppp/8/8/8/8/8/6K1", Color::Black, CastleRights::NONE, None)
            .unwrap();

    let result = engine.search(&pos, SearchLimits::default());

    assert!(result.best_move.is_none());
    assert_eq!(result.score, MATE);
}

#[test]
fn classical_engine_handles_stalemate() {
    let mut engine = ClassicalEngine::with_seed(4);
    let pos =
        GameState::from_placement("k7/8/1Q6/8/8/8/8/1K6", Color::Black, CastleRights::NONE, None)
            .unwrap();

    let result = engine.search(&pos, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
    assert_eq!(result.score, STALEMATE);
}

#[test]
fn classical_engine_is_named() {
    assert_eq!(ClassicalEngine::new().name(), "Classical");
}
