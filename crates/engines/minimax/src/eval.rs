//! Static evaluation: material plus mobility, white minus black.

use chess_core::{Color, Position};

/// Scores the position from white's point of view.
///
/// Each side is worth its material (pawn = 1) plus 0.1 per legal move:
/// - Positive = good for white
/// - Negative = good for black
/// - 0 = equal position
pub fn static_evaluate(pos: &Position) -> f64 {
    pos.material_and_mobility_value(Color::White) - pos.material_and_mobility_value(Color::Black)
}
