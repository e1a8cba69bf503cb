pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod scenarios;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ChessError;
pub use perft::perft;
pub use piece::{Piece, Placement};
pub use scenarios::Scenario;
pub use types::*;
pub use zobrist::ZOBRIST;

use serde::{Deserialize, Serialize};

// =============================================================================
// Engine trait, implemented by every move recommender
// =============================================================================

/// One scored root candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The candidate move
    #[serde(rename = "move")]
    pub mv: Move,
    /// Score after the move; higher favors white
    pub score: f64,
}

/// Trait that all engines must implement.
///
/// Engines rank every root candidate rather than only naming a best move,
/// so callers can show alternatives.
pub trait Engine: Send {
    /// Score every candidate for the side to move in `pos`.
    ///
    /// # Returns
    /// Candidates ordered best-first for the side to move
    fn recommend_moves(&mut self, pos: &Position, depth: u8) -> Vec<SearchResult>;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear hash tables, killer hints, etc.)
    fn new_game(&mut self) {}
}
