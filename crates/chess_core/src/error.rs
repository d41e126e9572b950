//! Error type for the fallible entry points of the rules engine.
//!
//! Move generation and search never fail; these errors only surface when a
//! caller hands in outside input (a coordinate string, a placement string) or
//! asks for an undo with nothing to undo.

use thiserror::Error;

use crate::types::{Color, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `try_undo_move` on a game with no moves played
    #[error("no move to undo")]
    EmptyHistory,

    /// Move text or move value that is not in the current legal-move list
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Move construction from a square without a piece
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid placement string: {0}")]
    InvalidPlacement(String),

    /// Placement must hold exactly one king per color
    #[error("expected one {color} king, found {count}")]
    KingCount { color: Color, count: usize },
}

pub type ChessResult<T> = Result<T, GameError>;
