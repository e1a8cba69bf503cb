use crate::{board::Position, types::Color};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, playing
/// every move on its own duplicate of the board.
pub fn perft(pos: &Position, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.legal_moves(side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = pos.duplicate();
        child
            .apply_full_move(side, mv.from, mv.to)
            .expect("generated legal move must apply");
        nodes += perft(&child, side.other(), depth - 1);
    }
    nodes
}
