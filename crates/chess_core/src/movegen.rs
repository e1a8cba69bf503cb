use crate::{board::Position, piece::Placement, types::*};

/// Keep the squares that are empty or hold an enemy piece.
pub(crate) fn capturing_or_quiet(pos: &Position, c: Color, targets: Vec<Square>) -> Vec<Square> {
    targets
        .into_iter()
        .filter(|&to| pos.get(to).color() != Some(c))
        .collect()
}

pub(crate) fn pawn_targets(pos: &Position, at: Placement) -> Vec<Square> {
    let c = at.color;
    let from = at.square;
    let dir = c.forward();
    // One rank in from the back rank
    let start_rank = (c.back_rank() as i8 + dir) as u8;
    let mut out = Vec::with_capacity(4);

    // forward 1
    if let Some(to) = from.offset(dir, 0) {
        if pos.get(to).is_empty() {
            out.push(to);

            // forward 2 from start
            if from.rank == start_rank {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if pos.get(to2).is_empty() {
                        out.push(to2);
                    }
                }
            }
        }
    }

    // captures
    for to in crate::attacks::pawn_attacks(from, c) {
        if pos.get(to).color() == Some(c.other()) {
            out.push(to);
        }
    }

    // en passant: the target pawn sits beside us, we land on the square it
    // passed over
    if let Some(ep) = pos.en_passant() {
        let victim = pos.get(ep);
        if victim.is(PieceKind::Pawn, c.other())
            && ep.rank == from.rank
            && (ep.file as i8 - from.file as i8).abs() == 1
        {
            if let Some(to) = ep.offset(-c.other().forward(), 0) {
                if pos.get(to).is_empty() {
                    out.push(to);
                }
            }
        }
    }

    out
}

/// Two-file king moves, pushed when the right is held, the path is clear and
/// the king neither starts in, passes through nor lands in check.
pub(crate) fn castle_targets(pos: &Position, at: Placement, out: &mut Vec<Square>) {
    let c = at.color;
    let home = Square::new(c.back_rank(), 4);
    if at.square != home {
        return;
    }

    // Can't castle out of check
    if pos.is_in_check(c) {
        return;
    }

    let rights = pos.castling();
    let enemy = c.other();
    let rank = home.rank;
    // (right held, rook file, files that must be empty, files the king crosses)
    let sides: [(bool, u8, &[u8], [u8; 2]); 2] = [
        (rights.kingside.contains(c), 7, &[5, 6], [5, 6]),
        (rights.queenside.contains(c), 0, &[1, 2, 3], [3, 2]),
    ];
    for (allowed, rook_file, between, crossed) in sides {
        if !allowed || !pos.get(Square::new(rank, rook_file)).is(PieceKind::Rook, c) {
            continue;
        }
        if between.iter().any(|&f| !pos.get(Square::new(rank, f)).is_empty()) {
            continue;
        }
        if crossed
            .iter()
            .any(|&f| pos.is_square_attacked(Square::new(rank, f), enemy))
        {
            continue;
        }
        out.push(Square::new(rank, crossed[1]));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
