use thiserror::Error;

use crate::types::{Color, Square};

/// The only failure the core reports: a caller asked for a move the position
/// does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid move for {color}: {from} -> {to}")]
    InvalidMove { color: Color, from: Square, to: Square },
}
