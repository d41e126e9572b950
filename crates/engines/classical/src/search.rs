//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White nodes maximize and
//! Black nodes minimize. Every node receives its own legal-move list,
//! generated right after the parent's `make_move`, so checkmate and stalemate
//! flags are already set when a node is scored.

use std::time::Instant;

use chess_core::{Color, GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::eval::{score_board, MATE};

/// Bookkeeping for one root search.
pub struct SearchContext<'a> {
    /// Depth the root was called with; moves are only recorded at this depth.
    pub root_depth: u8,
    pub best_move: Option<Move>,
    pub nodes: u64,
    pub rng: &'a mut dyn RngCore,
    /// With pruning off every sibling is searched (plain minimax).
    pub pruning: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(root_depth: u8, rng: &'a mut dyn RngCore) -> Self {
        Self {
            root_depth,
            best_move: None,
            nodes: 0,
            rng,
            pruning: true,
        }
    }
}

/// Outcome of a root search with at least one legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Minimax value of the root, from White's point of view
    pub score: i32,
    pub nodes: u64,
}

/// Searches `state` and returns its minimax value.
///
/// `moves` must be the legal moves of `state`; it is shuffled in place.
pub fn minimax(
    ctx: &mut SearchContext<'_>,
    state: &mut GameState,
    moves: &mut [Move],
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    ctx.nodes += 1;
    if depth == 0 || state.checkmate() || state.stalemate() {
        return score_board(state);
    }

    moves.shuffle(&mut *ctx.rng);
    let mut best = if maximizing { -MATE } else { MATE };

    for &mv in moves.iter() {
        state.make_move(mv);
        let mut replies = state.legal_moves();
        let score = minimax(ctx, state, &mut replies, depth - 1, alpha, beta, !maximizing);
        state.undo_move();

        let improved = if maximizing { score > best } else { score < best };
        if improved {
            best = score;
            if depth == ctx.root_depth {
                ctx.best_move = Some(mv);
            }
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if ctx.pruning && beta <= alpha {
            break;
        }
    }
    best
}

/// Picks a move for the side to move in `state`.
///
/// Returns `None` only when `moves` is empty. If no move beats the initial
/// bound (every line loses to mate) the first move of the shuffled list is
/// played instead.
pub fn find_best_move<R: RngCore>(
    state: &mut GameState,
    mut moves: Vec<Move>,
    depth: u8,
    rng: &mut R,
) -> Option<SearchOutcome> {
    if moves.is_empty() {
        return None;
    }

    let start = Instant::now();
    let maximizing = state.side_to_move() == Color::White;
    let mut ctx = SearchContext::new(depth, rng);
    let score = minimax(&mut ctx, state, &mut moves, depth, -MATE, MATE, maximizing);
    let best_move = ctx.best_move.unwrap_or(moves[0]);

    tracing::debug!(
        depth,
        score,
        nodes = ctx.nodes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        best = %best_move.notation(),
        "search finished"
    );

    Some(SearchOutcome {
        best_move,
        score,
        nodes: ctx.nodes,
    })
}

/// Minimax value of `state` without pruning.
///
/// Visits every node, so only practical at small depths. Alpha-beta must
/// always agree with it.
pub fn minimax_score(state: &mut GameState, depth: u8) -> i32 {
    let mut moves = state.legal_moves();
    let mut rng = StdRng::seed_from_u64(0);
    let maximizing = state.side_to_move() == Color::White;
    let mut ctx = SearchContext::new(depth, &mut rng);
    ctx.pruning = false;
    minimax(&mut ctx, state, &mut moves, depth, -MATE, MATE, maximizing)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
