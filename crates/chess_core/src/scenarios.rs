//! Ready-made positions: the standard start and a few fixed tactical setups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{CastlingRights, Position};
use crate::piece::Piece;
use crate::types::*;

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

impl Position {
    /// Put a new piece of `kind` and `color` on `sq`.
    pub fn place(&mut self, kind: PieceKind, color: Color, sq: Square) -> &mut Self {
        self.set(sq, Piece::new(kind, color, sq));
        self
    }

    /// Standard 32-piece start, all castling rights, white to move.
    pub fn setup() -> Self {
        let mut p = Position::with_state(CastlingRights::all(), None, Color::White);
        for color in [Color::Black, Color::White] {
            let back = color.back_rank();
            let pawns = (back as i8 + color.forward()) as u8;
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                p.place(kind, color, Square::new(back, file as u8));
                p.place(PieceKind::Pawn, color, Square::new(pawns, file as u8));
            }
        }
        p
    }

    /// Lone kings, each side with a queen. White's queen is next to the
    /// cornered black king.
    pub fn tactic0() -> Self {
        let mut p = Position::empty();
        p.place(PieceKind::King, Color::Black, Square::new(0, 7))
            .place(PieceKind::Queen, Color::White, Square::new(2, 7))
            .place(PieceKind::Queen, Color::Black, Square::new(5, 6))
            .place(PieceKind::King, Color::White, Square::new(7, 0));
        p
    }

    /// Back-rank pressure: doubled white rooks against a boxed-in black king.
    pub fn tactic1() -> Self {
        let mut p = Position::empty();
        p.place(PieceKind::King, Color::Black, Square::new(0, 7))
            .place(PieceKind::Pawn, Color::Black, Square::new(1, 7))
            .place(PieceKind::Pawn, Color::Black, Square::new(1, 6))
            .place(PieceKind::Queen, Color::Black, Square::new(2, 7))
            .place(PieceKind::Rook, Color::Black, Square::new(0, 1))
            .place(PieceKind::King, Color::White, Square::new(7, 0))
            .place(PieceKind::Rook, Color::White, Square::new(7, 2))
            .place(PieceKind::Rook, Color::White, Square::new(6, 2));
        p
    }
}

/// Named starting points selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    #[default]
    Setup,
    Tactic0,
    Tactic1,
}

impl Scenario {
    pub fn position(self) -> Position {
        match self {
            Scenario::Setup => Position::setup(),
            Scenario::Tactic0 => Position::tactic0(),
            Scenario::Tactic1 => Position::tactic1(),
        }
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "setup" | "start" | "startpos" => Ok(Scenario::Setup),
            "tactic0" => Ok(Scenario::Tactic0),
            "tactic1" => Ok(Scenario::Tactic1),
            other => Err(format!("unknown scenario: {other}")),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Setup => "setup",
            Scenario::Tactic0 => "tactic0",
            Scenario::Tactic1 => "tactic1",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "scenarios_tests.rs"]
mod scenarios_tests;
