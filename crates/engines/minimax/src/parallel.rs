//! Root-parallel search.
//!
//! Root moves are independent, so each one is scored on a rayon worker by a
//! fresh [`SearchEngine`] with its own transposition table and killer move.
//! Nothing is shared between workers.

use chess_core::{Position, SearchResult};
use rayon::prelude::*;
use tracing::info;

use crate::config::SearchConfig;
use crate::search::{SearchEngine, play, sort_for};

/// Same contract as [`SearchEngine::recommend_moves`], run across threads.
pub fn recommend_moves_parallel(
    pos: &Position,
    depth: u8,
    config: SearchConfig,
) -> Vec<SearchResult> {
    let side = pos.side_to_move;
    let moves = pos.pseudo_legal_moves(side);

    let mut results: Vec<SearchResult> = moves
        .par_iter()
        .map(|&mv| {
            let child = play(pos, side, mv);
            let mut worker = SearchEngine::with_config(child.duplicate(), config);
            let score = worker.evaluate_to_depth(
                &child,
                depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            SearchResult { mv, score }
        })
        .collect();

    sort_for(side, &mut results);
    info!(
        %side,
        depth,
        candidates = results.len(),
        threads = rayon::current_num_threads(),
        "parallel search finished"
    );
    results
}
