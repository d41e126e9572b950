//! Legal move generation.
//!
//! Moves are generated legal up front rather than generated pseudo-legal and
//! then filtered by playing them out: the detector's pins restrict each
//! piece to its pin line, king destinations are probed individually, and a
//! single check narrows everything else to the squares that block or capture
//! the checker.

use crate::board::GameState;
use crate::checks::{Check, CheckInfo, PinMap, detect, is_attacked};
use crate::moves::Move;
use crate::types::*;

/// Generate all legal moves, returning a freshly allocated vector.
/// Updates the state's cached `in_check`/`checkmate`/`stalemate` flags.
pub fn legal_moves(state: &mut GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(state, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(state: &mut GameState, out: &mut Vec<Move>) {
    out.clear();
    let info = detect(state);
    let color = state.side_to_move();
    let king = state.king_square(color);

    if info.is_double_check() {
        // Only the king can answer two checkers at once
        gen_king(state, king, color, true, out);
    } else if let [check] = info.checks.as_slice() {
        pseudo_moves(state, &info, out);
        let targets = resolving_squares(state, king, *check);
        out.retain(|m| {
            m.piece_moved.kind == PieceKind::King
                || targets.contains(&m.end)
                || (m.is_en_passant && m.capture_square() == check.attacker)
        });
    } else {
        pseudo_moves(state, &info, out);
    }

    state.in_check = info.in_check;
    state.checkmate = out.is_empty() && info.in_check;
    state.stalemate = out.is_empty() && !info.in_check;
}

impl GameState {
    /// See [`legal_moves`].
    pub fn legal_moves(&mut self) -> Vec<Move> {
        legal_moves(self)
    }
}

/// Squares a non-king move must land on to resolve `check`: the knight's own
/// square, or every square from the king up to and including a slider.
fn resolving_squares(state: &GameState, king: Square, check: Check) -> Vec<Square> {
    let is_knight = state
        .board()
        .get(check.attacker)
        .is_some_and(|pc| pc.kind == PieceKind::Knight);
    if is_knight {
        return vec![check.attacker];
    }

    let mut squares = Vec::with_capacity(7);
    for dist in 1..8 {
        let Some(sq) = king.offset(check.dir, dist) else {
            break;
        };
        squares.push(sq);
        if sq == check.attacker {
            break;
        }
    }
    squares
}

/// Every move for the side to move that respects pins. King moves are fully
/// legal; other moves still ignore any check on the king.
fn pseudo_moves(state: &GameState, info: &CheckInfo, out: &mut Vec<Move>) {
    let color = state.side_to_move();
    for (sq, pc) in state.board().pieces() {
        if pc.color != color {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(state, sq, pc, &info.pins, out),
            PieceKind::Knight => gen_knight(state, sq, pc, &info.pins, out),
            PieceKind::Bishop => gen_slider(state, sq, pc, &info.pins, &DIAGONAL, out),
            PieceKind::Rook => gen_slider(state, sq, pc, &info.pins, &ORTHOGONAL, out),
            PieceKind::Queen => {
                gen_slider(state, sq, pc, &info.pins, &ORTHOGONAL, out);
                gen_slider(state, sq, pc, &info.pins, &DIAGONAL, out);
            }
            PieceKind::King => gen_king(state, sq, color, info.in_check, out),
        }
    }
}

fn gen_pawn(state: &GameState, from: Square, pc: Piece, pins: &PinMap, out: &mut Vec<Move>) {
    let board = state.board();
    let push: Dir = (pc.color.forward(), 0);

    if pins.allows(from, push) {
        if let Some(one) = from.offset(push, 1) {
            if board.is_empty(one) {
                out.push(Move::build(from, one, pc, board, false, false));

                if from.row() == pc.color.pawn_row() {
                    if let Some(two) = from.offset(push, 2) {
                        if board.is_empty(two) {
                            out.push(Move::build(from, two, pc, board, false, false));
                        }
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let dir: Dir = (pc.color.forward(), side);
        if !pins.allows(from, dir) {
            continue;
        }
        let Some(to) = from.offset(dir, 1) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color != pc.color => {
                out.push(Move::build(from, to, pc, board, false, false));
            }
            None if state.en_passant_target() == Some(to) => {
                let mv = Move::build(from, to, pc, board, true, false);
                if !en_passant_exposes_king(state, &mv) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

/// En passant empties two squares on the mover's rank at once, which the pin
/// scan cannot see: with king, both pawns and an enemy rook or queen on one
/// rank the capture would uncover a check. Replays the capture on a scratch
/// board and probes the king there.
fn en_passant_exposes_king(state: &GameState, mv: &Move) -> bool {
    let color = mv.piece_moved.color;
    let mut scratch = state.board().clone();
    scratch.set(mv.start, None);
    scratch.set(mv.capture_square(), None);
    scratch.set(mv.end, Some(mv.piece_moved));
    is_attacked(&scratch, state.king_square(color), color)
}

fn gen_knight(state: &GameState, from: Square, pc: Piece, pins: &PinMap, out: &mut Vec<Move>) {
    // A pinned knight can never stay on its pin line
    if pins.get(from).is_some() {
        return;
    }
    let board = state.board();
    for jump in KNIGHT_JUMPS {
        if let Some(to) = from.offset(jump, 1) {
            match board.get(to) {
                Some(target) if target.color == pc.color => {}
                _ => out.push(Move::build(from, to, pc, board, false, false)),
            }
        }
    }
}

fn gen_slider(
    state: &GameState,
    from: Square,
    pc: Piece,
    pins: &PinMap,
    dirs: &[Dir],
    out: &mut Vec<Move>,
) {
    let board = state.board();
    for &dir in dirs {
        if !pins.allows(from, dir) {
            continue;
        }
        for dist in 1..8 {
            let Some(to) = from.offset(dir, dist) else {
                break;
            };
            match board.get(to) {
                None => out.push(Move::build(from, to, pc, board, false, false)),
                Some(target) => {
                    if target.color != pc.color {
                        out.push(Move::build(from, to, pc, board, false, false));
                    }
                    break;
                }
            }
        }
    }
}

fn gen_king(state: &GameState, from: Square, color: Color, in_check: bool, out: &mut Vec<Move>) {
    let board = state.board();
    let king = Piece::new(color, PieceKind::King);
    for step in KING_STEPS {
        let Some(to) = from.offset(step, 1) else {
            continue;
        };
        if board.get(to).is_some_and(|pc| pc.color == color) {
            continue;
        }
        if !is_attacked(board, to, color) {
            out.push(Move::build(from, to, king, board, false, false));
        }
    }
    if !in_check {
        gen_castles(state, from, color, out);
    }
}

fn gen_castles(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let row = color.home_row();
    if from != Square::new(row, 4) {
        return;
    }
    let board = state.board();
    let rights = state.castle_rights();
    let king = Piece::new(color, PieceKind::King);
    let rook = Some(Piece::new(color, PieceKind::Rook));
    let empty = |cols: &[u8]| cols.iter().all(|&c| board.is_empty(Square::new(row, c)));
    let safe = |cols: &[u8]| cols.iter().all(|&c| !is_attacked(board, Square::new(row, c), color));

    if rights.kingside(color)
        && board.get(Square::new(row, 7)) == rook
        && empty(&[5, 6])
        && safe(&[5, 6])
    {
        out.push(Move::build(from, Square::new(row, 6), king, board, false, true));
    }

    // The b-file square only has to be empty; the king never crosses it
    if rights.queenside(color)
        && board.get(Square::new(row, 0)) == rook
        && empty(&[1, 2, 3])
        && safe(&[3, 2])
    {
        out.push(Move::build(from, Square::new(row, 2), king, board, false, true));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
