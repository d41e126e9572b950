pub mod board;
pub mod checks;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use checks::{Check, CheckInfo, PinMap, detect, detect_from, is_attacked};
pub use error::*;
pub use movegen::*;
pub use moves::Move;
pub use perft::{perft, perft_divide};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move chooser (classical, random, ...)
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Search limits. Search always runs to the full depth; there is no clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move chosen (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation from White's point of view
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Engines receive a shared reference and search their own copy of the game,
/// so the caller's state is never disturbed.
pub trait Engine: Send {
    /// Pick a move for the side to move in `state`.
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
