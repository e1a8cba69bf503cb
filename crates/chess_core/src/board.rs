use std::fmt;

use crate::error::ChessError;
use crate::piece::Piece;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// A set of colors, one bit per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const BOTH: ColorSet = ColorSet(0b11);

    pub fn contains(self, c: Color) -> bool {
        self.0 & (1 << c.idx()) != 0
    }
    pub fn remove(&mut self, c: Color) {
        self.0 &= !(1 << c.idx());
    }
}

/// Colors still allowed to castle on each side. Rights are only ever revoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub kingside: ColorSet,
    pub queenside: ColorSet,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            kingside: ColorSet::BOTH,
            queenside: ColorSet::BOTH,
        }
    }
    pub fn none() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    grid: [[Piece; 8]; 8],
    castling: CastlingRights,
    en_passant: Option<Square>, // the pawn that just advanced two ranks
    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// A board with no pieces, no castling rights and white to move.
    pub fn empty() -> Self {
        Self::with_state(CastlingRights::none(), None, Color::White)
    }

    pub fn with_state(
        castling: CastlingRights,
        en_passant: Option<Square>,
        side_to_move: Color,
    ) -> Self {
        Position {
            grid: [[Piece::Empty; 8]; 8],
            castling,
            en_passant,
            side_to_move,
        }
    }

    pub fn get(&self, sq: Square) -> Piece {
        self.grid[sq.rank as usize][sq.file as usize]
    }

    /// Place `piece` on `sq`, re-stamping the piece's own square.
    pub fn set(&mut self, sq: Square, mut piece: Piece) {
        piece.set_square(sq);
        self.grid[sq.rank as usize][sq.file as usize] = piece;
    }

    pub fn is_in_bounds(&self, sq: Square) -> bool {
        sq.rank < 8 && sq.file < 8
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Deep copy. `Position` is plain data, so nothing is shared afterwards.
    pub fn duplicate(&self) -> Position {
        self.clone()
    }

    /// Occupied slots in board order, rank 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().copied().filter(|p| !p.is_empty())
    }

    pub fn pieces_of(&self, c: Color) -> Vec<Piece> {
        self.pieces().filter(|p| p.color() == Some(c)).collect()
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.is(PieceKind::King, c))
            .and_then(|p| p.square())
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces()
            .filter(|p| p.color() == Some(by))
            .any(|p| p.attacks(self).contains(&target))
    }

    /// False when `c` has no king on the board.
    pub fn is_in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// No legal move for any piece of `c`. Stalemate reads the same; use
    /// [`Position::is_stalemate`] to tell them apart.
    pub fn is_checkmate(&self, c: Color) -> bool {
        self.pieces_of(c).iter().all(|p| p.legal_moves(self).is_empty())
    }

    pub fn is_stalemate(&self, c: Color) -> bool {
        !self.is_in_check(c) && self.is_checkmate(c)
    }

    pub fn legal_moves(&self, c: Color) -> Vec<Move> {
        self.collect_moves(c, |p| p.legal_moves(self))
    }

    pub fn pseudo_legal_moves(&self, c: Color) -> Vec<Move> {
        self.collect_moves(c, |p| p.pseudo_legal_moves(self))
    }

    fn collect_moves(&self, c: Color, targets: impl Fn(&Piece) -> Vec<Square>) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for piece in self.pieces_of(c) {
            let Some(from) = piece.square() else { continue };
            out.extend(targets(&piece).into_iter().map(|to| Move::new(from, to)));
        }
        out
    }

    /// Material plus a 0.1 bonus per legal move.
    pub fn material_and_mobility_value(&self, c: Color) -> f64 {
        let material: f64 = self.pieces_of(c).iter().map(Piece::value).sum();
        let mobility = 0.1 * self.legal_moves(c).len() as f64;
        material + mobility
    }

    /// Pieces missing from `c`'s starting roster.
    pub fn captured_pieces(&self, c: Color) -> Vec<PieceKind> {
        let mut captured = STARTING_ROSTER.to_vec();
        for piece in self.pieces_of(c) {
            if let Some(kind) = piece.kind() {
                if let Some(i) = captured.iter().position(|&k| k == kind) {
                    captured.remove(i);
                }
            }
        }
        captured
    }

    /// Layout hash XOR metadata hash. Side to move is not included.
    pub fn structural_hash(&self) -> u64 {
        self.layout_hash() ^ self.metadata_hash()
    }

    fn layout_hash(&self) -> u64 {
        self.pieces().fold(0, |h, p| h ^ ZOBRIST.piece_key(p))
    }

    fn metadata_hash(&self) -> u64 {
        let mut h = 0;
        for c in [Color::Black, Color::White] {
            if self.castling.kingside.contains(c) {
                h ^= ZOBRIST.castling_key(c, true);
            }
            if self.castling.queenside.contains(c) {
                h ^= ZOBRIST.castling_key(c, false);
            }
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(ep);
        }
        h
    }

    /// Play a fully legal move for `color`. On failure nothing changes.
    pub fn apply_full_move(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<&mut Self, ChessError> {
        let piece = self.get(from);
        if piece.color() != Some(color) || !piece.legal_moves(self).contains(&to) {
            return Err(ChessError::InvalidMove { color, from, to });
        }
        self.apply_raw(from, to);
        Ok(self)
    }

    /// Like [`Position::apply_full_move`] but only requires a pseudo-legal
    /// destination, so the mover may leave its own king in check.
    pub fn apply_pseudo_move(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<&mut Self, ChessError> {
        let piece = self.get(from);
        if piece.color() != Some(color) || !piece.pseudo_legal_moves(self).contains(&to) {
            return Err(ChessError::InvalidMove { color, from, to });
        }
        self.apply_raw(from, to);
        Ok(self)
    }

    /// Move whatever stands on `from` to `to` and apply castling, en passant
    /// and promotion side effects, in that order. No legality checks.
    pub(crate) fn apply_raw(&mut self, from: Square, to: Square) {
        let moved = self.get(from);
        self.set(to, moved);
        self.set(from, Piece::Empty);

        let Some(color) = moved.color() else {
            return;
        };

        self.handle_castling(moved, from, to);
        self.handle_en_passant(moved, from, to);
        self.handle_promotion(moved, to);

        self.side_to_move = color.other();
    }

    fn handle_castling(&mut self, moved: Piece, from: Square, to: Square) {
        let Some(color) = moved.color() else { return };

        if moved.kind() == Some(PieceKind::King) && from.file.abs_diff(to.file) == 2 {
            let (rook_from, rook_to) = if to.file > 4 { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(from.rank, rook_from);
            let rook = self.get(rook_from);
            self.set(Square::new(from.rank, rook_to), rook);
            self.set(rook_from, Piece::Empty);
        }

        // Rights are keyed off the origin square on the mover's own back rank
        if from.rank != color.back_rank() {
            return;
        }
        match from.file {
            0 => self.castling.queenside.remove(color),
            4 => {
                self.castling.queenside.remove(color);
                self.castling.kingside.remove(color);
            }
            7 => self.castling.kingside.remove(color),
            _ => {}
        }
    }

    fn handle_en_passant(&mut self, moved: Piece, from: Square, to: Square) {
        let previous = self.en_passant.take();
        if moved.kind() != Some(PieceKind::Pawn) {
            return;
        }

        let passed_over = previous.and_then(|ep| {
            let victim = self.get(ep);
            victim
                .forward_dir()
                .filter(|_| victim.color() != moved.color())
                .and_then(|dir| ep.offset(-dir, 0))
                .map(|sq| (ep, sq))
        });

        if from.rank.abs_diff(to.rank) == 2 {
            self.en_passant = Some(to);
        }

        if let Some((ep, sq)) = passed_over {
            if sq == to {
                self.set(ep, Piece::Empty);
            }
        }
    }

    fn handle_promotion(&mut self, moved: Piece, to: Square) {
        if moved.kind() == Some(PieceKind::Pawn) && (to.rank == 0 || to.rank == 7) {
            let mut promoted = self.get(to);
            promoted.promote();
            self.set(to, promoted);
        }
    }
}

const STARTING_ROSTER: [PieceKind; 16] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
];

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.grid.iter().enumerate() {
            write!(f, "{} ", 8 - rank)?;
            for piece in row {
                write!(f, "{} ", piece.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
