//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation through self-play

use chess_core::{legal_moves_into, Engine, GameState, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    moves: Vec<Move>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            moves: Vec::with_capacity(64),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        let mut own = state.clone();
        legal_moves_into(&mut own, &mut self.moves);

        SearchResult {
            best_move: self.moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
