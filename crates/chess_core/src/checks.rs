//! Check and pin detection from the king's point of view.
//!
//! Instead of asking "which squares does the enemy attack", the detector
//! walks outward from the king along the eight queen rays and the eight
//! knight jumps. One pass yields both the checks and the pins that move
//! generation needs.

use crate::board::{Board, GameState};
use crate::types::*;

/// An enemy piece giving check: its square and the step from the king
/// towards it (a ray direction, or the knight jump for knight checks).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    pub dir: Dir,
}

/// Pinned pieces keyed by square, each with the ray direction from the king.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinMap {
    dirs: [Option<Dir>; 64],
}

impl PinMap {
    pub fn new() -> Self {
        Self { dirs: [None; 64] }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Dir> {
        self.dirs[sq.idx()]
    }

    fn insert(&mut self, sq: Square, dir: Dir) {
        self.dirs[sq.idx()] = Some(dir);
    }

    pub fn len(&self) -> usize {
        self.dirs.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the piece on `sq` may step in `dir`: unpinned pieces always
    /// may, pinned ones only along their pin line (towards or away from the king).
    #[inline]
    pub fn allows(&self, sq: Square, dir: Dir) -> bool {
        match self.get(sq) {
            None => true,
            Some(pin) => pin == dir || pin == (-dir.0, -dir.1),
        }
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: PinMap,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Checks and pins against the side to move.
pub fn detect(state: &GameState) -> CheckInfo {
    let color = state.side_to_move();
    detect_from(state.board(), state.king_square(color), color)
}

/// Checks and pins against a `color` king standing on `king`.
///
/// `king` need not be where the king actually is. Kings of `color` are
/// transparent to the scan, so probing a destination square sees through the
/// square the king would vacate.
pub fn detect_from(board: &Board, king: Square, color: Color) -> CheckInfo {
    let enemy = color.other();
    let mut pins = PinMap::new();
    let mut checks = Vec::with_capacity(2);

    let rays = ORTHOGONAL
        .iter()
        .map(|&d| (d, true))
        .chain(DIAGONAL.iter().map(|&d| (d, false)));

    for (dir, orthogonal) in rays {
        let mut candidate: Option<Square> = None;
        for dist in 1..8i8 {
            let Some(sq) = king.offset(dir, dist) else {
                break;
            };
            let Some(pc) = board.get(sq) else {
                continue;
            };
            if pc.color == color {
                if pc.kind == PieceKind::King {
                    continue;
                }
                if candidate.is_some() {
                    break;
                }
                candidate = Some(sq);
                continue;
            }
            if attacks_along(pc, dir, dist, orthogonal, enemy) {
                match candidate {
                    None => checks.push(Check { attacker: sq, dir }),
                    Some(pinned) => pins.insert(pinned, dir),
                }
            }
            break;
        }
    }

    for jump in KNIGHT_JUMPS {
        if let Some(sq) = king.offset(jump, 1) {
            if board.get(sq) == Some(Piece::new(enemy, PieceKind::Knight)) {
                checks.push(Check {
                    attacker: sq,
                    dir: jump,
                });
            }
        }
    }

    CheckInfo {
        in_check: !checks.is_empty(),
        pins,
        checks,
    }
}

/// Whether `color`'s king would be attacked standing on `sq`.
pub fn is_attacked(board: &Board, sq: Square, color: Color) -> bool {
    detect_from(board, sq, color).in_check
}

/// Can enemy piece `pc`, found `dist` steps from the king along `dir`, hit
/// the king down that ray?
fn attacks_along(pc: Piece, dir: Dir, dist: i8, orthogonal: bool, enemy: Color) -> bool {
    match pc.kind {
        PieceKind::Queen => true,
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::King => dist == 1,
        // Seen from the king, an enemy pawn sits one step against its own
        // direction of travel.
        PieceKind::Pawn => dist == 1 && !orthogonal && dir.0 == -enemy.forward(),
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod checks_tests;
