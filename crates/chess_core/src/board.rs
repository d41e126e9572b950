use std::fmt;

use crate::error::{ChessResult, GameError};
use crate::moves::Move;
use crate::types::*;

/// 8x8 mailbox, indexed by `Square::idx`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for color in [Color::White, Color::Black] {
            for col in 0..8u8 {
                b.set(
                    Square::new(color.pawn_row(), col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
                b.set(
                    Square::new(color.home_row(), col),
                    Some(Piece::new(color, BACK_RANK[col as usize])),
                );
            }
        }
        b
    }

    /// Parses the piece-placement field of a FEN string
    /// (`rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`). Nothing else of FEN
    /// is read here.
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        let bad = |why: &str| GameError::InvalidPlacement(format!("{why} in {placement:?}"));

        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }

        let mut board = Self::empty();
        // Placement lists rank 8 first, which is row 0
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as u8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| bad("unknown piece"))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(bad("too many files"));
                    }
                    board.set(Square::new(row as u8, col), Some(Piece::new(color, kind)));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("too many files"));
                }
            }
            if col != 8 {
                return Err(bad("not enough files"));
            }
        }

        for color in [Color::White, Color::Black] {
            board.king_square(color)?;
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.idx()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.idx()] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Every occupied square with its piece, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|p| (Square::from_index(i), p)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }

    /// Locates the single king of `color`, failing unless there is exactly one.
    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        let king = Piece::new(color, PieceKind::King);
        let mut found = self.pieces().filter(|&(_, p)| p == king).map(|(sq, _)| sq);
        match (found.next(), found.next()) {
            (Some(sq), None) => Ok(sq),
            (None, _) => Err(GameError::KingCount { color, count: 0 }),
            (Some(_), Some(_)) => Err(GameError::KingCount {
                color,
                count: self.count(king),
            }),
        }
    }

    /// Inverse of `from_placement`.
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            let mut gap = 0;
            for col in 0..8u8 {
                match self.get(Square::new(row, col)) {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = self.get(Square::new(row, col)).map_or('.', Piece::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Parses the castling field of FEN (`KQkq`, `Kq`, `-`).
    pub fn from_flags(flags: &str) -> ChessResult<Self> {
        let mut rights = Self::NONE;
        if flags == "-" {
            return Ok(rights);
        }
        for c in flags.chars() {
            match c {
                'K' => rights.white_kingside = true,
                'Q' => rights.white_queenside = true,
                'k' => rights.black_kingside = true,
                'q' => rights.black_queenside = true,
                _ => {
                    return Err(GameError::InvalidPlacement(format!(
                        "bad castling flag {c:?}"
                    )));
                }
            }
        }
        Ok(rights)
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    fn revoke_both(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drops the right tied to the rook that starts on `col` (a- or h-file).
    fn revoke_corner(&mut self, color: Color, col: u8) {
        match (color, col) {
            (Color::White, 0) => self.white_queenside = false,
            (Color::White, 7) => self.white_kingside = false,
            (Color::Black, 0) => self.black_queenside = false,
            (Color::Black, 7) => self.black_kingside = false,
            _ => {}
        }
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// A game in progress: board, side to move and the full undo history.
///
/// The move, en-passant and castle-rights histories advance in lockstep. The
/// two state histories start with one entry for the initial position, so
/// outside of `make_move`/`undo_move`:
/// `move_history.len() + 1 == en_passant_history.len() == castle_rights_history.len()`.
/// The top of each state history is the current value.
///
/// `in_check`, `checkmate` and `stalemate` are caches written by the legal
/// move generator; they describe the position as of the last generation.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_history: Vec<Move>,
    pub(crate) en_passant_history: Vec<Option<Square>>,
    pub(crate) castle_rights_history: Vec<CastleRights>,
    pub(crate) king_squares: [Square; 2],
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// The standard initial position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            side_to_move: Color::White,
            move_history: Vec::new(),
            en_passant_history: vec![None],
            castle_rights_history: vec![CastleRights::ALL],
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            in_check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Sets up an arbitrary position. The board must hold exactly one king
    /// per color, and an en-passant target must sit behind a pawn that could
    /// just have made a double push.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
    ) -> ChessResult<Self> {
        let king_squares = [
            board.king_square(Color::White)?,
            board.king_square(Color::Black)?,
        ];
        if let Some(target) = en_passant {
            check_en_passant_target(&board, side_to_move, target)?;
        }
        Ok(Self {
            board,
            side_to_move,
            move_history: Vec::new(),
            en_passant_history: vec![en_passant],
            castle_rights_history: vec![castle_rights],
            king_squares,
            in_check: false,
            checkmate: false,
            stalemate: false,
        })
    }

    /// `from_board` over a placement string, see `Board::from_placement`.
    pub fn from_placement(
        placement: &str,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
    ) -> ChessResult<Self> {
        Self::from_board(
            Board::from_placement(placement)?,
            side_to_move,
            castle_rights,
            en_passant,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn in_check(&self) -> bool {
        self.in_check
    }
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.idx()]
    }

    /// Square a pawn may capture onto en passant this ply.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_history.last().copied().flatten()
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights_history
            .last()
            .copied()
            .unwrap_or(CastleRights::NONE)
    }

    /// Applies `m` without checking it. Only pass moves produced by
    /// `legal_moves` for this exact position; use `try_make_move` for
    /// anything else.
    pub fn make_move(&mut self, m: Move) {
        let mover = m.piece_moved.color;

        self.board.set(m.start, None);
        self.board.set(m.end, Some(m.piece_moved));
        self.side_to_move = self.side_to_move.other();
        if m.piece_moved.kind == PieceKind::King {
            self.king_squares[mover.idx()] = m.end;
        }

        if m.is_promotion {
            self.board.set(m.end, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if m.is_en_passant {
            self.board.set(m.capture_square(), None);
        }

        let ep_target = if m.piece_moved.kind == PieceKind::Pawn
            && m.start.row().abs_diff(m.end.row()) == 2
        {
            Some(Square::new((m.start.row() + m.end.row()) / 2, m.start.col()))
        } else {
            None
        };
        self.en_passant_history.push(ep_target);

        let rights = self.rights_after(&m);
        self.castle_rights_history.push(rights);

        if m.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&m);
            let rook = self.board.get(rook_from);
            self.board.set(rook_from, None);
            self.board.set(rook_to, rook);
        }

        self.move_history.push(m);
    }

    /// Takes back the last move and returns it, or `None` when no move has
    /// been played. Undo strictly in reverse order of `make_move`.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.move_history.pop()?;

        self.board.set(m.start, Some(m.piece_moved));
        self.board.set(m.end, m.piece_captured);
        self.side_to_move = self.side_to_move.other();
        if m.piece_moved.kind == PieceKind::King {
            self.king_squares[m.piece_moved.color.idx()] = m.start;
        }

        if m.is_en_passant {
            self.board.set(m.end, None);
            self.board.set(m.capture_square(), m.piece_captured);
        }

        self.en_passant_history.pop();
        self.castle_rights_history.pop();

        if m.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&m);
            let rook = self.board.get(rook_to);
            self.board.set(rook_to, None);
            self.board.set(rook_from, rook);
        }

        // The position before any move is never terminal
        self.checkmate = false;
        self.stalemate = false;
        Some(m)
    }

    /// `undo_move` that reports an empty history as an error.
    pub fn try_undo_move(&mut self) -> ChessResult<Move> {
        self.undo_move().ok_or(GameError::EmptyHistory)
    }

    /// Applies `m` only if it is in the current legal-move list. The list's
    /// own copy is applied, so flags on `m` are not trusted.
    pub fn try_make_move(&mut self, m: Move) -> ChessResult<()> {
        let legal = self
            .legal_moves()
            .into_iter()
            .find(|&lm| lm == m)
            .ok_or_else(|| GameError::IllegalMove(m.notation()))?;
        self.make_move(legal);
        Ok(())
    }

    /// Resolves coordinate notation (`e2e4`, optionally `e7e8q`) against the
    /// current legal moves.
    pub fn parse_move(&mut self, text: &str) -> ChessResult<Move> {
        let text = text.trim();
        let coords = match text.len() {
            4 => text,
            5 if text.ends_with(['q', 'Q']) => &text[..4],
            _ => return Err(GameError::IllegalMove(text.to_string())),
        };
        let square = |s: &str| {
            Square::from_coord(s).ok_or_else(|| GameError::InvalidSquare(s.to_string()))
        };
        let start = square(coords.get(0..2).unwrap_or(""))?;
        let end = square(coords.get(2..4).unwrap_or(""))?;

        self.legal_moves()
            .into_iter()
            .find(|m| m.start == start && m.end == end)
            .ok_or_else(|| GameError::IllegalMove(text.to_string()))
    }

    fn rights_after(&self, m: &Move) -> CastleRights {
        let mut rights = self.castle_rights();
        let mover = m.piece_moved.color;
        match m.piece_moved.kind {
            PieceKind::King => rights.revoke_both(mover),
            PieceKind::Rook if m.start.row() == mover.home_row() => {
                rights.revoke_corner(mover, m.start.col())
            }
            _ => {}
        }
        if let Some(captured) = m.piece_captured {
            if captured.kind == PieceKind::Rook && m.end.row() == captured.color.home_row() {
                rights.revoke_corner(captured.color, m.end.col());
            }
        }
        rights
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The pawn that double-pushed past `target` belongs to the side not on move:
/// it stands one step beyond the target and its start square is empty.
fn check_en_passant_target(board: &Board, side_to_move: Color, target: Square) -> ChessResult<()> {
    let pusher = side_to_move.other();
    let step: Dir = (pusher.forward(), 0);
    let pawn = target.offset(step, 1);
    let origin = target.offset(step, -1);

    let valid = target.row() as i8 == pusher.pawn_row() as i8 + pusher.forward()
        && board.is_empty(target)
        && pawn.is_some_and(|sq| board.get(sq) == Some(Piece::new(pusher, PieceKind::Pawn)))
        && origin.is_some_and(|sq| board.is_empty(sq));
    if valid {
        Ok(())
    } else {
        Err(GameError::InvalidPlacement(format!(
            "no {pusher} pawn could have double-pushed past en passant square {target}"
        )))
    }
}

/// (rook origin, rook destination) for a castling move.
fn castle_rook_squares(m: &Move) -> (Square, Square) {
    let row = m.end.row();
    if m.end.col() > m.start.col() {
        (Square::new(row, 7), Square::new(row, 5))
    } else {
        (Square::new(row, 0), Square::new(row, 3))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
