//! Minimax search with alpha-beta pruning

use chess_core::{Color, Move, Position, SearchResult};
use tracing::{debug, info, trace};

use crate::config::SearchConfig;
use crate::eval::static_evaluate;
use crate::parallel::recommend_moves_parallel;
use crate::tt::TranspositionTable;

/// Depth-bounded minimax over duplicated positions.
///
/// Every child is searched on its own copy of the board, so nothing is
/// undone on the way back up. The engine keeps:
/// - a transposition table, cleared at the start of every root search
/// - a single killer move, carried across the whole search and across calls
#[derive(Debug, Clone)]
pub struct SearchEngine {
    position: Position,
    config: SearchConfig,
    table: TranspositionTable,
    killer: Option<Move>,
    /// Node counter for statistics
    nodes: u64,
}

impl SearchEngine {
    pub fn new(position: Position) -> Self {
        Self::with_config(position, SearchConfig::default())
    }

    pub fn with_config(position: Position, config: SearchConfig) -> Self {
        Self {
            position,
            table: TranspositionTable::new(config.depth_aware_cache),
            config,
            killer: None,
            nodes: 0,
        }
    }

    /// The position this engine was created for.
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn killer(&self) -> Option<Move> {
        self.killer
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Rank the moves of the engine's own position at the configured depth.
    pub fn recommend(&mut self) -> Vec<SearchResult> {
        let root = self.position.duplicate();
        if self.config.parallel_root {
            return recommend_moves_parallel(&root, self.config.depth, self.config);
        }
        self.recommend_moves(&root, self.config.depth)
    }

    /// Score every pseudo-legal move of the side to move and sort them
    /// best-first for that side.
    pub fn recommend_moves(&mut self, pos: &Position, depth: u8) -> Vec<SearchResult> {
        self.table.clear();
        self.nodes = 0;

        let side = pos.side_to_move;
        let mut results: Vec<SearchResult> = pos
            .pseudo_legal_moves(side)
            .into_iter()
            .map(|mv| {
                let child = play(pos, side, mv);
                self.nodes += 1;
                let score = self.evaluate_to_depth(
                    &child,
                    depth.saturating_sub(1),
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                );
                debug!(%mv, score, "root move scored");
                SearchResult { mv, score }
            })
            .collect();

        sort_for(side, &mut results);

        info!(
            %side,
            depth,
            candidates = results.len(),
            nodes = self.nodes,
            cached = self.table.len(),
            "search finished"
        );
        results
    }

    /// Minimax value of `pos` searched `depth` plies deep, higher is better
    /// for white.
    ///
    /// A side to move that is in check scores as lost right away. Scores
    /// produced under a cutoff are cached like exact ones.
    pub fn evaluate_to_depth(
        &mut self,
        pos: &Position,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        if depth == 0 {
            return static_evaluate(pos);
        }

        let side = pos.side_to_move;
        if pos.is_in_check(side) {
            return lost_for(side);
        }

        let key = self.table.key(pos, depth);
        if let Some(score) = self.table.probe(&key) {
            return score;
        }

        let mut moves = pos.pseudo_legal_moves(side);
        if let Some(killer) = self.killer {
            if let Some(i) = moves.iter().position(|&mv| mv == killer) {
                moves[..=i].rotate_right(1);
            }
        }

        let mut best = lost_for(side);
        for mv in moves {
            let child = play(pos, side, mv);
            self.nodes += 1;
            let score = self.evaluate_to_depth(&child, depth - 1, alpha, beta);

            match side {
                Color::White => {
                    best = best.max(score);
                    alpha = alpha.max(best);
                }
                Color::Black => {
                    best = best.min(score);
                    beta = beta.min(best);
                }
            }

            if beta <= alpha {
                trace!(%mv, depth, "cutoff, new killer");
                self.killer = Some(mv);
                break; // Cutoff
            }
        }

        self.table.store(key, best);
        best
    }

    /// Forget the killer hint and cached scores.
    pub fn reset(&mut self) {
        self.table.clear();
        self.killer = None;
        self.nodes = 0;
    }
}

/// Worst possible score for `side`.
pub(crate) fn lost_for(side: Color) -> f64 {
    match side {
        Color::White => f64::NEG_INFINITY,
        Color::Black => f64::INFINITY,
    }
}

/// Best-first for `side`: descending for white, ascending for black.
/// Ties keep generation order.
pub(crate) fn sort_for(side: Color, results: &mut [SearchResult]) {
    match side {
        Color::White => results.sort_by(|a, b| b.score.total_cmp(&a.score)),
        Color::Black => results.sort_by(|a, b| a.score.total_cmp(&b.score)),
    }
}

/// Duplicate `pos` and play `mv` on the copy.
///
/// Moves come from the position's own generator, so a rejection means move
/// generation and move application disagree.
pub(crate) fn play(pos: &Position, side: Color, mv: Move) -> Position {
    let mut child = pos.duplicate();
    if let Err(e) = child.apply_pseudo_move(side, mv.from, mv.to) {
        panic!("generated move rejected by the board: {e}");
    }
    child
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
