//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material and
//! piece-square evaluation. Moves are shuffled at every node, so equal
//! lines are played in varying order from game to game.

mod eval;
mod search;

use chess_core::{Engine, GameState, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use eval::{score_board, MATE, STALEMATE};
pub use search::{find_best_move, minimax, minimax_score, SearchContext, SearchOutcome};

/// Classical chess engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    rng: StdRng,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a reproducible move-ordering shuffle.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        let mut own = state.clone();
        let moves = own.legal_moves();

        match find_best_move(&mut own, moves, limits.depth, &mut self.rng) {
            Some(outcome) => SearchResult {
                best_move: Some(outcome.best_move),
                score: outcome.score,
                depth: limits.depth,
                nodes: outcome.nodes,
            },
            // Flags were just set by move generation
            None => SearchResult {
                best_move: None,
                score: score_board(&own),
                depth: limits.depth,
                nodes: 1,
            },
        }
    }

    fn name(&self) -> &str {
        "Classical"
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
