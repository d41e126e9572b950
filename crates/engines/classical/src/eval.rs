//! Static evaluation: material plus piece-square tables.

use chess_core::{Color, GameState, Piece, PieceKind, Square};

/// Score of a decided game. White mated is `-MATE`, Black mated is `MATE`.
pub const MATE: i32 = 100_000;

/// Score of a stalemate.
pub const STALEMATE: i32 = 0;

/// Material values indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [10, 30, 35, 50, 90, 0];

type Table = [[i32; 8]; 8];

// Tables are laid out as seen from White: row 0 is rank 8.
const KNIGHT_TABLE: Table = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_TABLE: Table = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const QUEEN_TABLE: Table = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

const ROOK_TABLE: Table = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

/// White pawns; Black reads the same table upside down.
const PAWN_TABLE: Table = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

fn positional(piece: Piece, sq: Square) -> i32 {
    let (row, col) = (sq.row() as usize, sq.col() as usize);
    match piece.kind {
        PieceKind::Pawn => match piece.color {
            Color::White => PAWN_TABLE[row][col],
            Color::Black => PAWN_TABLE[7 - row][col],
        },
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_TABLE[row][col],
        PieceKind::King => 0,
    }
}

/// Evaluates the position from White's point of view.
///
/// Relies on the terminal flags set by the last legal move generation, so a
/// mated or stalemated side must have had its moves generated first.
pub fn score_board(state: &GameState) -> i32 {
    if state.checkmate() {
        return match state.side_to_move() {
            Color::White => -MATE,
            Color::Black => MATE,
        };
    }
    if state.stalemate() {
        return STALEMATE;
    }

    state
        .board()
        .pieces()
        .map(|(sq, piece)| {
            let value = PIECE_VALUES[piece.kind.idx()] + positional(piece, sq);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
