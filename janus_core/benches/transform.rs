//! `janus_core::transform` の性能計測（ビット並列変換と盤面変換）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use janus_core::position::Board;
use janus_core::transform;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 4つのビット並列変換を計測する。
fn bench_primitives(criterion: &mut Criterion) {
    let sample = Board::initial().occupied();

    criterion.bench_function("transform/flip_vertical", |bench| {
        bench.iter(|| black_box(transform::flip_vertical(black_box(sample))));
    });
    criterion.bench_function("transform/flip_horizontal", |bench| {
        bench.iter(|| black_box(transform::flip_horizontal(black_box(sample))));
    });
    criterion.bench_function("transform/flip_diagonal", |bench| {
        bench.iter(|| black_box(transform::flip_diagonal(black_box(sample))));
    });
    criterion.bench_function("transform/rotate_180", |bench| {
        bench.iter(|| black_box(transform::rotate_180(black_box(sample))));
    });
}

/// `transform_board` を計測する。
fn bench_transform_board(criterion: &mut Criterion) {
    criterion.bench_function("transform/transform_board_initial", |bench| {
        bench.iter_batched(
            Board::initial,
            |board| black_box(transform::transform_board(board, transform::flip_diagonal)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_primitives(&mut criterion);
    bench_transform_board(&mut criterion);

    criterion.final_summary();
}
