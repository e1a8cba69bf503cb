use serde::{Deserialize, Serialize};

/// Search settings, loadable from the analyzer's TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root
    pub depth: u8,
    /// Key cached scores by remaining depth as well as position
    pub depth_aware_cache: bool,
    /// Score root moves on worker threads, one engine per move
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            depth_aware_cache: true,
            parallel_root: false,
        }
    }
}
