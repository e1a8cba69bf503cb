//! Zobrist keys behind [`Position::structural_hash`](crate::Position::structural_hash).
//!
//! The structural hash is the XOR of two parts:
//! - the layout: one random value per (color, piece kind, square) present
//! - the metadata: one value per castling right held and one per possible
//!   en-passant target square
//!
//! Side to move is kept separately so search can fold it into its own key.

use crate::piece::Piece;
use crate::types::{Color, Square};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XOR when white is to move
    pub side_to_move: u64,
    /// [color][kingside, queenside]
    pub castling: [[u64; 2]; 2],
    /// One per en-passant target square
    pub en_passant: [u64; 64],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64; // Fixed seed

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [[0u64; 2]; 2];
        let mut color = 0;
        while color < 2 {
            let mut side = 0;
            while side < 2 {
                state = xorshift64(state);
                castling[color][side] = state;
                side += 1;
            }
            color += 1;
        }

        let mut en_passant = [0u64; 64];
        let mut i = 0;
        while i < 64 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    /// Key for a piece on its own square. `Empty` contributes nothing.
    #[inline(always)]
    pub fn piece_key(&self, piece: Piece) -> u64 {
        match (piece.kind(), piece.placement()) {
            (Some(kind), Some(at)) => self.pieces[at.color.idx()][kind.idx()][at.square.index()],
            _ => 0,
        }
    }

    #[inline(always)]
    pub fn castling_key(&self, color: Color, kingside: bool) -> u64 {
        self.castling[color.idx()][if kingside { 0 } else { 1 }]
    }

    #[inline(always)]
    pub fn ep_key(&self, sq: Square) -> u64 {
        self.en_passant[sq.index()]
    }

    #[inline(always)]
    pub fn side_key(&self, color: Color) -> u64 {
        match color {
            Color::White => self.side_to_move,
            Color::Black => 0,
        }
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
