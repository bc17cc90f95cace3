use criterion::{criterion_group, criterion_main, Criterion, black_box};
use xqbot::board::{Board, Color};
use xqbot::perft::perft;
use xqbot::rules::{classify, legal_moves};

fn bench_movegen(c: &mut Criterion) {
    let b = Board::startpos();
    c.bench_function("legal_moves_startpos", |ben| ben.iter(|| black_box(legal_moves(black_box(&b), Color::Red).len())));
    c.bench_function("classify_startpos", |ben| ben.iter(|| black_box(classify(black_box(&b), Color::Black))));
    c.bench_function("perft_2_startpos", |ben| ben.iter(|| black_box(perft(black_box(&b), Color::Red, 2))));
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
