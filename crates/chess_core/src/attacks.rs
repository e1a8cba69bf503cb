//! Raw attack patterns for every piece kind.
//!
//! Attack sets ignore whose piece sits on the target square: a slider's ray
//! stops on (and includes) the first occupied square of either color. Move
//! generation filters own-color targets afterwards.

use crate::board::Position;
use crate::types::{Color, Square};

/// Knight jumps as (rank, file) deltas.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Single king steps, also the queen's ray directions.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// On-board squares one delta away from `from`.
pub fn step_attacks(from: Square, deltas: &[(i8, i8)]) -> Vec<Square> {
    deltas
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .collect()
}

/// Squares along each ray up to and including the first occupied square.
pub fn ray_attacks(pos: &Position, from: Square, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &(dr, df) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, df) {
            out.push(next);
            if !pos.get(next).is_empty() {
                break;
            }
            cur = next;
        }
    }
    out
}

/// The two diagonal squares a pawn of `color` on `from` attacks.
pub fn pawn_attacks(from: Square, color: Color) -> Vec<Square> {
    let dir = color.forward();
    [-1, 1]
        .iter()
        .filter_map(|&df| from.offset(dir, df))
        .collect()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
