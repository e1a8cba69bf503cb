use super::*;
use chess_core::{PieceKind, Square};

/// Plain minimax: no pruning, no cache, no move ordering.
fn brute_force(pos: &Position, depth: u8) -> f64 {
    if depth == 0 {
        return static_evaluate(pos);
    }
    let side = pos.side_to_move;
    if pos.is_in_check(side) {
        return lost_for(side);
    }
    let scores = pos
        .pseudo_legal_moves(side)
        .into_iter()
        .map(|mv| brute_force(&play(pos, side, mv), depth - 1));
    match side {
        Color::White => scores.fold(f64::NEG_INFINITY, f64::max),
        Color::Black => scores.fold(f64::INFINITY, f64::min),
    }
}

fn full_window(engine: &mut SearchEngine, pos: &Position, depth: u8) -> f64 {
    engine.evaluate_to_depth(pos, depth, f64::NEG_INFINITY, f64::INFINITY)
}

#[test]
fn test_startpos_depth_one_lists_twenty_moves() {
    let pos = Position::setup();
    let mut engine = SearchEngine::new(pos.clone());
    let results = engine.recommend_moves(&pos, 1);

    assert_eq!(results.len(), 20);
    let pawn_moves = results
        .iter()
        .filter(|r| pos.get(r.mv.from).kind() == Some(PieceKind::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);

    // best-first for white
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(engine.nodes() >= 20);
}

#[test]
fn test_black_results_sorted_ascending() {
    let mut pos = Position::setup();
    pos.side_to_move = Color::Black;
    let mut engine = SearchEngine::new(pos.clone());
    let results = engine.recommend_moves(&pos, 1);

    assert_eq!(results.len(), 20);
    for pair in results.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
}

#[test]
fn test_alpha_beta_matches_brute_force() {
    let cases = [
        (Position::setup(), 2),
        (Position::tactic0(), 2),
        (Position::tactic0(), 3),
        (Position::tactic1(), 2),
        (Position::tactic1(), 3),
    ];
    for depth_aware_cache in [true, false] {
        let config = SearchConfig {
            depth_aware_cache,
            ..SearchConfig::default()
        };
        for (pos, depth) in &cases {
            let mut engine = SearchEngine::with_config(pos.clone(), config);
            let pruned = full_window(&mut engine, pos, *depth);
            let expected = brute_force(pos, *depth);
            assert_eq!(
                pruned, expected,
                "depth {depth}, depth-aware cache {depth_aware_cache}"
            );
        }
    }
}

#[test]
fn test_root_scores_match_brute_force_children() {
    let pos = Position::tactic1();
    let mut engine = SearchEngine::new(pos.clone());
    let results = engine.recommend_moves(&pos, 2);

    assert_eq!(results.len(), pos.pseudo_legal_moves(Color::White).len());
    for r in &results {
        let child = play(&pos, Color::White, r.mv);
        assert_eq!(r.score, brute_force(&child, 1), "move {}", r.mv);
    }
}

#[test]
fn test_depth_zero_is_static_even_in_check() {
    let mut pos = Position::empty();
    pos.place(PieceKind::King, Color::White, Square::new(7, 4))
        .place(PieceKind::Rook, Color::Black, Square::new(0, 4))
        .place(PieceKind::King, Color::Black, Square::new(0, 0));
    assert!(pos.is_in_check(Color::White));

    let mut engine = SearchEngine::new(pos.clone());
    assert_eq!(full_window(&mut engine, &pos, 0), static_evaluate(&pos));
}

#[test]
fn test_side_in_check_scores_as_lost() {
    let mut pos = Position::empty();
    pos.place(PieceKind::King, Color::White, Square::new(7, 4))
        .place(PieceKind::Rook, Color::Black, Square::new(0, 4))
        .place(PieceKind::King, Color::Black, Square::new(0, 0));

    // White has easy escapes but is scored as lost without searching them
    let mut engine = SearchEngine::new(pos.clone());
    assert_eq!(full_window(&mut engine, &pos, 2), f64::NEG_INFINITY);
    assert_eq!(engine.nodes(), 0);

    pos.side_to_move = Color::Black;
    pos.set(Square::new(0, 4), chess_core::Piece::Empty);
    pos.place(PieceKind::Rook, Color::White, Square::new(0, 7));
    assert!(pos.is_in_check(Color::Black));
    assert_eq!(full_window(&mut engine, &pos, 1), f64::INFINITY);
}

#[test]
fn test_checking_move_ranks_first() {
    let pos = Position::tactic0();
    let mut engine = SearchEngine::new(pos.clone());
    let results = engine.recommend_moves(&pos, 2);

    let best = results[0];
    assert_eq!(best.score, f64::INFINITY);
    let child = play(&pos, Color::White, best.mv);
    assert!(child.is_in_check(Color::Black));
}

#[test]
fn test_killer_recorded_on_cutoff() {
    let pos = Position::tactic1();
    let mut engine = SearchEngine::new(pos.clone());
    assert_eq!(engine.killer(), None);
    engine.recommend_moves(&pos, 3);
    assert!(engine.killer().is_some());

    engine.reset();
    assert_eq!(engine.killer(), None);
    assert!(engine.table().is_empty());
}

#[test]
fn test_repeated_search_is_stable() {
    let pos = Position::tactic1();
    let mut engine = SearchEngine::new(pos.clone());
    let first = engine.recommend_moves(&pos, 2);
    assert!(!engine.table().is_empty());
    let second = engine.recommend_moves(&pos, 2);

    let score_of = |results: &[SearchResult], mv: Move| {
        results.iter().find(|r| r.mv == mv).map(|r| r.score)
    };
    for r in &first {
        assert_eq!(score_of(&second, r.mv), Some(r.score));
    }
}

#[test]
fn test_root_position_is_not_mutated() {
    let pos = Position::setup();
    let hash = pos.structural_hash();
    let mut engine = SearchEngine::new(pos.clone());
    engine.recommend_moves(&pos, 2);
    assert_eq!(pos.structural_hash(), hash);
    assert_eq!(engine.position(), &pos);
}

#[test]
fn test_parallel_matches_serial() {
    let pos = Position::tactic0();
    let config = SearchConfig::default();
    let mut engine = SearchEngine::with_config(pos.clone(), config);
    let serial = engine.recommend_moves(&pos, 2);
    let parallel = recommend_moves_parallel(&pos, 2, config);
    assert_eq!(serial, parallel);
}

#[test]
fn test_recommend_uses_own_position_and_config() {
    let config = SearchConfig {
        depth: 1,
        ..SearchConfig::default()
    };
    let mut serial = SearchEngine::with_config(Position::setup(), config);
    let results = serial.recommend();
    assert_eq!(results.len(), 20);

    let mut threaded = SearchEngine::with_config(
        Position::setup(),
        SearchConfig {
            parallel_root: true,
            ..config
        },
    );
    assert_eq!(threaded.recommend(), results);
}

#[test]
fn test_no_moves_gives_empty_recommendation() {
    let mut pos = Position::empty();
    pos.place(PieceKind::King, Color::Black, Square::new(0, 0));
    pos.side_to_move = Color::White;
    let mut engine = SearchEngine::new(pos.clone());
    assert!(engine.recommend_moves(&pos, 3).is_empty());
}
