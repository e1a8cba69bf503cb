//! Per-piece capability: move patterns, material value, glyphs.
//!
//! `Piece` is a closed enum. Every behavior is a single `match` over the
//! variants, and `Piece::Empty` fills every unoccupied slot of the grid so
//! callers never deal with a missing piece.

use crate::attacks::{
    DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, pawn_attacks, ray_attacks, step_attacks,
};
use crate::board::Position;
use crate::movegen;
use crate::types::{Color, PieceKind, Square};

/// Owner and location of a piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub color: Color,
    pub square: Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Pawn(Placement),
    Knight(Placement),
    Bishop(Placement),
    Rook(Placement),
    Queen(Placement),
    King(Placement),
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        let at = Placement { color, square };
        match kind {
            PieceKind::Pawn => Piece::Pawn(at),
            PieceKind::Knight => Piece::Knight(at),
            PieceKind::Bishop => Piece::Bishop(at),
            PieceKind::Rook => Piece::Rook(at),
            PieceKind::Queen => Piece::Queen(at),
            PieceKind::King => Piece::King(at),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    pub fn placement(&self) -> Option<Placement> {
        match *self {
            Piece::Empty => None,
            Piece::Pawn(at)
            | Piece::Knight(at)
            | Piece::Bishop(at)
            | Piece::Rook(at)
            | Piece::Queen(at)
            | Piece::King(at) => Some(at),
        }
    }

    fn placement_mut(&mut self) -> Option<&mut Placement> {
        match self {
            Piece::Empty => None,
            Piece::Pawn(at)
            | Piece::Knight(at)
            | Piece::Bishop(at)
            | Piece::Rook(at)
            | Piece::Queen(at)
            | Piece::King(at) => Some(at),
        }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Pawn(_) => Some(PieceKind::Pawn),
            Piece::Knight(_) => Some(PieceKind::Knight),
            Piece::Bishop(_) => Some(PieceKind::Bishop),
            Piece::Rook(_) => Some(PieceKind::Rook),
            Piece::Queen(_) => Some(PieceKind::Queen),
            Piece::King(_) => Some(PieceKind::King),
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.placement().map(|at| at.color)
    }

    pub fn square(&self) -> Option<Square> {
        self.placement().map(|at| at.square)
    }

    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind() == Some(kind) && self.color() == Some(color)
    }

    /// Re-stamp the piece's own idea of where it stands. No-op for `Empty`.
    pub fn set_square(&mut self, square: Square) {
        if let Some(at) = self.placement_mut() {
            at.square = square;
        }
    }

    /// Material value in pawns.
    pub fn value(&self) -> f64 {
        match self {
            Piece::Empty | Piece::King(_) => 0.0,
            Piece::Pawn(_) => 1.0,
            Piece::Knight(_) | Piece::Bishop(_) => 3.0,
            Piece::Rook(_) => 5.0,
            Piece::Queen(_) => 9.0,
        }
    }

    pub fn symbol(&self) -> char {
        match (self.kind(), self.color()) {
            (Some(kind), Some(color)) => kind.symbol(color),
            _ => '·',
        }
    }

    /// Rank direction of travel. Only pawns have one.
    pub fn forward_dir(&self) -> Option<i8> {
        match self {
            Piece::Pawn(at) => Some(at.color.forward()),
            _ => None,
        }
    }

    /// Turn a pawn into a queen in place.
    pub fn promote(&mut self) {
        self.promote_to(PieceKind::Queen);
    }

    pub fn promote_to(&mut self, kind: PieceKind) {
        if let Piece::Pawn(at) = *self {
            *self = Piece::new(kind, at.color, at.square);
        }
    }

    /// Raw attack pattern. The king only contributes its single steps so
    /// that check detection never has to consider castling.
    pub fn attacks(&self, pos: &Position) -> Vec<Square> {
        match *self {
            Piece::Empty => Vec::new(),
            Piece::Pawn(at) => pawn_attacks(at.square, at.color),
            Piece::Knight(at) => step_attacks(at.square, &KNIGHT_DELTAS),
            Piece::Bishop(at) => ray_attacks(pos, at.square, &DIAGONALS),
            Piece::Rook(at) => ray_attacks(pos, at.square, &ORTHOGONALS),
            Piece::Queen(at) => ray_attacks(pos, at.square, &KING_DELTAS),
            Piece::King(at) => step_attacks(at.square, &KING_DELTAS),
        }
    }

    /// Destinations allowed by the movement pattern and board occupancy,
    /// without regard to the mover's own king.
    pub fn pseudo_legal_moves(&self, pos: &Position) -> Vec<Square> {
        match *self {
            Piece::Empty => Vec::new(),
            Piece::Pawn(at) => movegen::pawn_targets(pos, at),
            Piece::King(at) => {
                let mut out = movegen::capturing_or_quiet(pos, at.color, self.attacks(pos));
                movegen::castle_targets(pos, at, &mut out);
                out
            }
            Piece::Knight(at) | Piece::Bishop(at) | Piece::Rook(at) | Piece::Queen(at) => {
                movegen::capturing_or_quiet(pos, at.color, self.attacks(pos))
            }
        }
    }

    /// Pseudo-legal destinations that do not leave the mover's king in check.
    pub fn legal_moves(&self, pos: &Position) -> Vec<Square> {
        let Some(at) = self.placement() else {
            return Vec::new();
        };
        self.pseudo_legal_moves(pos)
            .into_iter()
            .filter(|&to| {
                let mut trial = pos.duplicate();
                trial.apply_raw(at.square, to);
                !trial.is_in_check(at.color)
            })
            .collect()
    }
}

impl PieceKind {
    /// Board glyph for this kind in `color`.
    pub fn symbol(self, color: Color) -> char {
        let (white, black) = match self {
            PieceKind::Pawn => ('♙', '♟'),
            PieceKind::Knight => ('♘', '♞'),
            PieceKind::Bishop => ('♗', '♝'),
            PieceKind::Rook => ('♖', '♜'),
            PieceKind::Queen => ('♕', '♛'),
            PieceKind::King => ('♔', '♚'),
        };
        match color {
            Color::White => white,
            Color::Black => black,
        }
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
