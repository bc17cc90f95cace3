use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use xqbot::board::{Board, Color};
use xqbot::rules::legal_moves;
use xqbot::search::{EvalLayer, SearchParams, Searcher};

#[test]
fn movetime_returns_quickly_with_move() {
    let b = Board::startpos();
    let mut searcher = Searcher::default();
    let params = SearchParams {
        depth: 0, // until the clock runs out
        movetime: Some(Duration::from_millis(50)),
        layer: EvalLayer::RiverCrossing,
        order_captures: true,
    };
    let t0 = Instant::now();
    let res = searcher.search_with_params(&b, Color::Red, params);
    let elapsed = t0.elapsed();
    assert!(res.best_move.is_some(), "no bestmove under movetime");
    assert!(elapsed < Duration::from_millis(1500), "search exceeded time: {:?}", elapsed);
}

#[test]
fn deep_search_is_cut_by_the_budget() {
    let b = Board::startpos();
    let params = SearchParams { depth: 12, movetime: Some(Duration::from_millis(100)), ..SearchParams::default() };
    let t0 = Instant::now();
    let res = Searcher::default().search_with_params(&b, Color::Black, params);
    assert!(t0.elapsed() < Duration::from_millis(2000), "took {:?}", t0.elapsed());
    assert!(res.depth_reached < 12);
    assert!(legal_moves(&b, Color::Black).contains(&res.best_move.unwrap()));
}

#[test]
fn raised_abort_flag_yields_provisional_move() {
    let b = Board::startpos();
    let flag = Arc::new(AtomicBool::new(true));
    let mut searcher = Searcher::with_abort(flag);
    let res = searcher.search_depth(&b, Color::Red, 6);
    assert_eq!(res.depth_reached, 0);
    assert_eq!(res.best_move, legal_moves(&b, Color::Red).first().copied());
}
