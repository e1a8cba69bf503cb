//! Minimax Chess Engine
//!
//! Depth-bounded minimax with alpha-beta pruning over copied positions,
//! a transposition cache and a single killer move for ordering.

mod config;
mod eval;
mod parallel;
mod search;
mod tt;

use chess_core::{Engine, Position, SearchResult};

pub use config::SearchConfig;
pub use eval::static_evaluate;
pub use parallel::recommend_moves_parallel;
pub use search::SearchEngine;
pub use tt::{TableKey, TranspositionTable};

/// Sequential engine wrapper for callers that work through [`Engine`].
///
/// The position to search arrives with every [`Engine::recommend_moves`]
/// call. The wrapped searcher's own position stays empty and is never read.
/// Its killer move carries over between calls until [`Engine::new_game`].
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    inner: SearchEngine,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            inner: SearchEngine::with_config(Position::empty(), config),
        }
    }

    pub fn nodes(&self) -> u64 {
        self.inner.nodes()
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn recommend_moves(&mut self, pos: &Position, depth: u8) -> Vec<SearchResult> {
        self.inner.recommend_moves(pos, depth)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.inner.reset();
    }
}

/// Root-parallel engine: one independent search per root move.
#[derive(Debug, Clone, Default)]
pub struct ParallelEngine {
    config: SearchConfig,
}

impl ParallelEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Engine for ParallelEngine {
    fn recommend_moves(&mut self, pos: &Position, depth: u8) -> Vec<SearchResult> {
        recommend_moves_parallel(pos, depth, self.config)
    }

    fn name(&self) -> &str {
        "Minimax parallel v1.0"
    }
}
