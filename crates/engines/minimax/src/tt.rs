//! Transposition cache keyed by structural hash and side to move.

use std::collections::HashMap;

use chess_core::{Position, ZOBRIST};

/// Identity of a searched node. `depth` stays 0 unless the cache is
/// depth-aware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub hash: u64,
    pub depth: u8,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    table: HashMap<TableKey, f64>,
    depth_aware: bool,
}

impl TranspositionTable {
    pub fn new(depth_aware: bool) -> Self {
        Self {
            table: HashMap::new(),
            depth_aware,
        }
    }

    pub fn key(&self, pos: &Position, depth: u8) -> TableKey {
        TableKey {
            hash: pos.structural_hash() ^ ZOBRIST.side_key(pos.side_to_move),
            depth: if self.depth_aware { depth } else { 0 },
        }
    }

    pub fn probe(&self, key: &TableKey) -> Option<f64> {
        self.table.get(key).copied()
    }

    pub fn store(&mut self, key: TableKey, score: f64) {
        self.table.insert(key, score);
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
