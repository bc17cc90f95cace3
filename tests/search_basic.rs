use xqbot::board::{Board, Color, PieceKind, Square};
use xqbot::rules::legal_moves;
use xqbot::search::{find_best_move, Difficulty, SearchParams, Searcher, MATE_SCORE};

fn mate_in_one() -> Board {
    Board::from_pieces(&[
        (PieceKind::General, Color::Black, (4, 0)),
        (PieceKind::Chariot, Color::Red, (0, 1)),
        (PieceKind::Chariot, Color::Red, (8, 5)),
        (PieceKind::General, Color::Red, (3, 9)),
    ]).unwrap()
}

#[test]
fn search_returns_legal_move_startpos() {
    let b = Board::startpos();
    let mut searcher = Searcher::default();
    let res = searcher.search_depth(&b, Color::Red, 2);
    let bm = res.best_move.expect("no move found at depth 2");
    assert!(legal_moves(&b, Color::Red).contains(&bm));
    assert_eq!(res.depth_reached, 2);
    assert!(res.nodes > 0);
}

#[test]
fn search_finds_mate_in_one() {
    let b = mate_in_one();
    let mut searcher = Searcher::default();
    let res = searcher.search_depth(&b, Color::Red, 1);
    let bm = res.best_move.expect("expected a best move");
    assert_eq!((bm.from, bm.to), (Square::new(8, 5), Square::new(8, 0)), "got {bm}");
    assert_eq!(res.score, MATE_SCORE - 1);
}

#[test]
fn deeper_search_still_plays_the_quick_mate() {
    let b = mate_in_one();
    let res = find_best_move(&b, Color::Red, Difficulty::Elementary);
    let bm = res.best_move.expect("expected a best move");
    assert_eq!(bm.to, Square::new(8, 0));
    assert!(res.score >= MATE_SCORE - 64);
}

#[test]
fn search_prefers_winning_a_free_horse() {
    let b = Board::from_pieces(&[
        (PieceKind::Chariot, Color::Red, (0, 5)),
        (PieceKind::Horse, Color::Black, (0, 2)),
        (PieceKind::General, Color::Black, (5, 0)),
        (PieceKind::General, Color::Red, (3, 9)),
    ]).unwrap();
    for depth in [1, 2] {
        let mut searcher = Searcher::default();
        let res = searcher.search_depth(&b, Color::Red, depth);
        let bm = res.best_move.expect("expected a best move");
        assert_eq!(bm.to, Square::new(0, 2), "depth {depth}: got {bm}");
    }
}

#[test]
fn no_move_when_mated_or_stalemated() {
    let mated = Board::from_pieces(&[
        (PieceKind::General, Color::Black, (4, 0)),
        (PieceKind::Chariot, Color::Red, (0, 1)),
        (PieceKind::Chariot, Color::Red, (8, 0)),
        (PieceKind::General, Color::Red, (3, 9)),
    ]).unwrap();
    let res = Searcher::default().search_depth(&mated, Color::Black, 3);
    assert!(res.best_move.is_none());
    assert_eq!(res.score, -MATE_SCORE);

    let stalemated = Board::from_pieces(&[
        (PieceKind::General, Color::Black, (4, 0)),
        (PieceKind::Chariot, Color::Red, (0, 1)),
        (PieceKind::Chariot, Color::Red, (3, 5)),
        (PieceKind::Chariot, Color::Red, (5, 5)),
        (PieceKind::General, Color::Red, (3, 9)),
    ]).unwrap();
    assert!(find_best_move(&stalemated, Color::Black, Difficulty::Master).best_move.is_none());
}

#[test]
fn search_does_not_touch_the_board() {
    let b = Board::startpos();
    let before = b.clone();
    let _ = Searcher::default().search_depth(&b, Color::Black, 2);
    assert_eq!(b, before);
}

#[test]
fn ordering_does_not_change_the_score() {
    let b = Board::startpos();
    let plain = Searcher::default().search_with_params(&b, Color::Red, SearchParams { depth: 2, ..SearchParams::default() });
    let ordered = Searcher::default().search_with_params(
        &b,
        Color::Red,
        SearchParams { depth: 2, order_captures: true, ..SearchParams::default() },
    );
    assert_eq!(plain.score, ordered.score);
}
