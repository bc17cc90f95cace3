use criterion::{criterion_group, criterion_main, Criterion, black_box};
use xqbot::board::{Board, Color};
use xqbot::search::{EvalLayer, SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    let b = Board::startpos();
    c.bench_function("search_depth_3_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::default();
            let p = SearchParams { depth: 3, layer: EvalLayer::RiverCrossing, order_captures: true, ..SearchParams::default() };
            let r = s.search_with_params(black_box(&b), Color::Red, p);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
