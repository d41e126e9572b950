//! The `Move` record and its two text forms.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::error::{ChessResult, GameError};
use crate::types::*;

/// One ply, captured together with the board context it was generated from.
///
/// `piece_moved`, `piece_captured` and `is_promotion` are read off the board
/// *before* the move is applied and never recomputed, which is what lets
/// `GameState::undo_move` restore the position from the move alone.
///
/// Two moves are equal when they share start and end squares. A legal-move
/// list never holds two moves with the same endpoints, so the flags do not
/// take part in equality or hashing.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    /// Builds a plain move (no en passant, no castling) from the board.
    pub fn new(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece = board.get(start).ok_or(GameError::EmptySquare(start))?;
        Ok(Self::build(start, end, piece, board, false, false))
    }

    /// Builds an en-passant capture; the captured pawn is the enemy pawn even
    /// though `end` is empty.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece = board.get(start).ok_or(GameError::EmptySquare(start))?;
        Ok(Self::build(start, end, piece, board, true, false))
    }

    /// Builds the king's half of a castling move.
    pub fn castle(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece = board.get(start).ok_or(GameError::EmptySquare(start))?;
        Ok(Self::build(start, end, piece, board, false, true))
    }

    pub(crate) fn build(
        start: Square,
        end: Square,
        piece: Piece,
        board: &Board,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let piece_captured = if is_en_passant {
            Some(Piece::new(piece.color.other(), PieceKind::Pawn))
        } else {
            board.get(end)
        };
        Self {
            start,
            end,
            piece_moved: piece,
            piece_captured,
            is_en_passant,
            is_castle,
            is_promotion: piece.kind == PieceKind::Pawn
                && end.row() == piece.color.promotion_row(),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the captured piece; differs from `end` only for en passant.
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.start.row(), self.end.col())
        } else {
            self.end
        }
    }

    /// Coordinate notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.start.coord(), self.end.coord())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

/// Short display form: `O-O`, `O-O-O`, `e4`, `dxe5`, `Nf3`, `Qxh7`.
///
/// There is no check suffix and no disambiguation between two pieces of the
/// same kind that can reach the same square.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return if self.end.col() == 6 {
                f.write_str("O-O")
            } else {
                f.write_str("O-O-O")
            };
        }
        let capture = if self.is_capture() { "x" } else { "" };
        match self.piece_moved.kind {
            PieceKind::Pawn if self.is_capture() => {
                write!(f, "{}x{}", self.start.file_char(), self.end)
            }
            PieceKind::Pawn => write!(f, "{}", self.end),
            kind => write!(f, "{}{}{}", kind.letter(), capture, self.end),
        }
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
