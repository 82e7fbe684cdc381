use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_slidepuzzle::core::{find_hint_move, shuffle, Board, ShufflePolicy, SimpleRng};
use tui_slidepuzzle::types::Difficulty;

fn bench_shuffle_easy(c: &mut Criterion) {
    let start = Board::solved(3);
    let mut rng = SimpleRng::new(12345);

    c.bench_function("shuffle_easy_3x3", |b| {
        b.iter(|| {
            shuffle(
                black_box(&start),
                ShufflePolicy::for_difficulty(Difficulty::Easy),
                &mut rng,
            )
        })
    });
}

fn bench_shuffle_hard(c: &mut Criterion) {
    let start = Board::solved(3);
    let mut rng = SimpleRng::new(12345);

    c.bench_function("shuffle_hard_3x3", |b| {
        b.iter(|| {
            shuffle(
                black_box(&start),
                ShufflePolicy::for_difficulty(Difficulty::Hard),
                &mut rng,
            )
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = Board::solved(3);

    c.bench_function("apply_move", |b| {
        b.iter(|| board.apply_move(black_box(7)))
    });
}

fn bench_progress(c: &mut Criterion) {
    let mut rng = SimpleRng::new(9);
    let board = shuffle(
        &Board::solved(3),
        ShufflePolicy::for_difficulty(Difficulty::Hard),
        &mut rng,
    );

    c.bench_function("progress", |b| b.iter(|| black_box(&board).progress()));
}

fn bench_hint(c: &mut Criterion) {
    let mut rng = SimpleRng::new(9);
    let board = shuffle(
        &Board::solved(3),
        ShufflePolicy::for_difficulty(Difficulty::Hard),
        &mut rng,
    );

    c.bench_function("find_hint_move", |b| {
        b.iter(|| find_hint_move(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_shuffle_easy,
    bench_shuffle_hard,
    bench_apply_move,
    bench_progress,
    bench_hint
);
criterion_main!(benches);
