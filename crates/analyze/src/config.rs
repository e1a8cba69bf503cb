//! Analyzer settings: TOML file first, command-line flags on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_core::{Color, Scenario};
use minimax_engine::SearchConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything one analyzer run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    pub scenario: Scenario,
    /// Overrides the scenario's side to move
    pub side: Option<Color>,
    /// Show only the best N candidates
    pub top: Option<usize>,
    pub output: OutputFormat,
    /// Default tracing filter, `RUST_LOG` wins when set
    pub log_level: String,
    pub search: SearchConfig,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            side: None,
            top: None,
            output: OutputFormat::default(),
            log_level: "warn".to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl AnalyzeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing config {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
