use super::*;
use chess_core::{CastleRights, Color};

fn position(placement: &str, side: Color) -> GameState {
    GameState::from_placement(placement, side, CastleRights::NONE, None).unwrap()
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(7);
    let pos = GameState::new();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&pos, limits);

    assert!(result.best_move.is_some());

    let mut pos_copy = pos.clone();
    let mut legal_moves = Vec::new();
    legal_moves_into(&mut pos_copy, &mut legal_moves);
    assert!(legal_moves.contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_is_reproducible_with_a_seed() {
    let pos = GameState::new();
    let picks = |seed| {
        let mut engine = RandomEngine::with_seed(seed);
        (0..5)
            .map(|_| engine.search(&pos, SearchLimits::default()).best_move.unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(3), picks(3));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::with_seed(1);
    let pos = position("R5k1/5ppp/8/8/8/8/8/6K1", Color::Black);

    let result = engine.search(&pos, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::with_seed(1);
    let pos = position("k7/8/1Q6/8/8/8/8/1K6", Color::Black);

    let result = engine.search(&pos, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
