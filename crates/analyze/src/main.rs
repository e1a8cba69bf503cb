//! Analyzer CLI
//!
//! Build a scenario position, search it and print every candidate move
//! ranked best-first for the side to move.
//!
//! ```bash
//! cargo run -p analyze -- --scenario tactic1 --depth 4
//! cargo run -p analyze -- --config analyze.toml --json
//! ```

mod config;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chess_core::{Color, Engine, Scenario};
use clap::Parser;
use minimax_engine::{MinimaxEngine, ParallelEngine, SearchConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AnalyzeConfig, OutputFormat};
use crate::report::{Report, render_json, render_text};

#[derive(Debug, Parser)]
#[command(name = "analyze", about = "Rank the moves of a chess position")]
struct Cli {
    /// TOML settings file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// setup, tactic0 or tactic1
    #[arg(short, long)]
    scenario: Option<Scenario>,
    /// Side to move (white or black)
    #[arg(long, value_parser = parse_color)]
    side: Option<Color>,
    #[arg(short, long)]
    depth: Option<u8>,
    /// Score root moves on all cores
    #[arg(long)]
    parallel: bool,
    /// Share cached scores across search depths
    #[arg(long)]
    flat_cache: bool,
    /// Show only the best N moves
    #[arg(short = 'n', long)]
    top: Option<usize>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown side: {other}")),
    }
}

impl Cli {
    fn apply(&self, config: &mut AnalyzeConfig) {
        if let Some(scenario) = self.scenario {
            config.scenario = scenario;
        }
        if self.side.is_some() {
            config.side = self.side;
        }
        if let Some(depth) = self.depth {
            config.search.depth = depth;
        }
        if self.parallel {
            config.search.parallel_root = true;
        }
        if self.flat_cache {
            config.search.depth_aware_cache = false;
        }
        if self.top.is_some() {
            config.top = self.top;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}

fn create_engine(search: SearchConfig) -> Box<dyn Engine> {
    if search.parallel_root {
        Box::new(ParallelEngine::new(search))
    } else {
        Box::new(MinimaxEngine::new(search))
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AnalyzeConfig::load(path)?,
        None => AnalyzeConfig::default(),
    };
    cli.apply(&mut config);
    init_tracing(&config.log_level);

    let mut pos = config.scenario.position();
    if let Some(side) = config.side {
        pos.side_to_move = side;
    }

    let mut engine = create_engine(config.search);
    info!(
        scenario = %config.scenario,
        depth = config.search.depth,
        engine = engine.name(),
        "starting analysis"
    );

    let start = Instant::now();
    let results = engine.recommend_moves(&pos, config.search.depth);
    let shown = config.top.map_or(results.len(), |n| n.min(results.len()));

    let report = Report {
        scenario: config.scenario.to_string(),
        side: pos.side_to_move,
        depth: config.search.depth,
        engine: engine.name(),
        elapsed_ms: start.elapsed().as_millis(),
        results: &results[..shown],
    };
    match config.output {
        OutputFormat::Text => println!("{}", render_text(&pos, &report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}
