//! Printing ranked candidates.

use std::fmt::Write;

use chess_core::{Color, Move, Position, SearchResult};
use serde::{Serialize, Serializer};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub scenario: String,
    pub side: Color,
    pub depth: u8,
    pub engine: &'a str,
    pub elapsed_ms: u128,
    #[serde(serialize_with = "serialize_results")]
    pub results: &'a [SearchResult],
}

/// One ranked line of the JSON report.
#[derive(Serialize)]
struct RankedMove {
    #[serde(rename = "move")]
    mv: Move,
    #[serde(serialize_with = "serialize_score")]
    score: f64,
}

fn serialize_results<S: Serializer>(results: &[SearchResult], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(results.iter().map(|r| RankedMove {
        mv: r.mv,
        score: r.score,
    }))
}

/// Finite scores stay numbers, decided ones become `"+inf"` / `"-inf"`.
fn serialize_score<S: Serializer>(score: &f64, s: S) -> Result<S::Ok, S::Error> {
    if score.is_finite() {
        s.serialize_f64(*score)
    } else {
        s.serialize_str(&format_score(*score))
    }
}

fn format_score(score: f64) -> String {
    if score == f64::INFINITY {
        "+inf".to_string()
    } else if score == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{score:+.2}")
    }
}

/// Board, captured material and the ranked move table.
pub fn render_text(pos: &Position, report: &Report<'_>) -> String {
    let mut out = String::new();
    writeln!(out, "{pos}").ok();
    for color in [Color::White, Color::Black] {
        let captured = pos.captured_pieces(color);
        if !captured.is_empty() {
            let glyphs: Vec<String> = captured
                .iter()
                .map(|kind| kind.symbol(color).to_string())
                .collect();
            writeln!(out, "{color} has lost: {}", glyphs.join(" ")).ok();
        }
    }
    writeln!(out).ok();
    writeln!(
        out,
        "=== {} | {} to move | depth {} | {} ===",
        report.scenario, report.side, report.depth, report.engine
    )
    .ok();
    for (rank, r) in report.results.iter().enumerate() {
        writeln!(out, "{:>3}. {}  {:>8}", rank + 1, r.mv, format_score(r.score)).ok();
    }
    write!(out, "searched in {} ms", report.elapsed_ms).ok();
    out
}

pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{PieceKind, Square};

    fn sample() -> Vec<SearchResult> {
        vec![
            SearchResult {
                mv: Move::new(Square::new(6, 4), Square::new(4, 4)),
                score: f64::INFINITY,
            },
            SearchResult {
                mv: Move::new(Square::new(6, 3), Square::new(4, 3)),
                score: 0.25,
            },
        ]
    }

    #[test]
    fn test_text_lists_moves_in_order() {
        let results = sample();
        let report = Report {
            scenario: "setup".to_string(),
            side: Color::White,
            depth: 2,
            engine: "Minimax v1.0",
            elapsed_ms: 5,
            results: &results,
        };
        let text = render_text(&Position::setup(), &report);
        assert!(text.contains("  1. e2e4      +inf"));
        assert!(text.contains("  2. d2d4     +0.25"));
        assert!(!text.contains("has lost"));
    }

    #[test]
    fn test_json_report() {
        let results = sample();
        let report = Report {
            scenario: "tactic0".to_string(),
            side: Color::Black,
            depth: 1,
            engine: "x",
            elapsed_ms: 0,
            results: &results,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report).expect("json")).expect("parse");
        assert_eq!(json["side"], "black");
        assert_eq!(json["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["results"][0]["move"]["from"]["rank"], 6);
        assert_eq!(json["results"][0]["score"], "+inf");
        assert_eq!(json["results"][1]["score"], 0.25);
    }

    #[test]
    fn test_json_keeps_sign_of_decided_scores() {
        let results = vec![
            SearchResult {
                mv: Move::new(Square::new(2, 7), Square::new(1, 7)),
                score: f64::INFINITY,
            },
            SearchResult {
                mv: Move::new(Square::new(7, 0), Square::new(6, 0)),
                score: f64::NEG_INFINITY,
            },
        ];
        let report = Report {
            scenario: "tactic0".to_string(),
            side: Color::White,
            depth: 2,
            engine: "x",
            elapsed_ms: 0,
            results: &results,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report).expect("json")).expect("parse");
        let best = &json["results"][0]["score"];
        let worst = &json["results"][1]["score"];
        assert_eq!(best, "+inf");
        assert_eq!(worst, "-inf");
        assert_ne!(best, worst);
    }

    #[test]
    fn test_text_lists_captured_glyphs() {
        let mut pos = Position::setup();
        pos.set(Square::new(0, 3), chess_core::Piece::Empty);
        pos.set(Square::new(6, 0), chess_core::Piece::Empty);
        let report = Report {
            scenario: "setup".to_string(),
            side: Color::White,
            depth: 1,
            engine: "x",
            elapsed_ms: 0,
            results: &[],
        };
        let text = render_text(&pos, &report);
        assert!(text.contains(&format!(
            "black has lost: {}",
            PieceKind::Queen.symbol(Color::Black)
        )));
        assert!(text.contains(&format!(
            "white has lost: {}",
            PieceKind::Pawn.symbol(Color::White)
        )));
        assert!(!text.contains("Queen"));
    }
}
