use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
    /// Rank holding this color's pieces at the start of the game.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 7,
        }
    }
    /// Rank direction this color's pawns advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        self as usize
    }
}

/// A board coordinate. Rank 0 is black's back rank, rank 7 is white's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub const fn new(rank: u8, file: u8) -> Self {
        Self { rank, file }
    }

    /// Build a square from signed coordinates, `None` when off the board.
    pub fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    pub fn offset(self, dr: i8, df: i8) -> Option<Self> {
        Self::from_coords(self.rank as i8 + dr, self.file as i8 + df)
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'8' - self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

/// Origin and destination only. Castling, en passant and promotion are
/// inferred from the moving piece when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
