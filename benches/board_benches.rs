use criterion::{black_box, Criterion};
use std::time::Duration;

use isolation_agent::board::{Board, MoveRule, RandBoard};
use isolation_agent::core::GameState;

pub const SEED: u64 = 5363310003543;

lazy_static! {
    pub static ref RAND_BOARDS: Vec<Board> = RandBoard::new()
        .size(7, 7)
        .moves(2, 16)
        .pseudo_random(SEED)
        .many(100);
    pub static ref KNIGHT_BOARDS: Vec<Board> = RandBoard::new()
        .size(7, 7)
        .rule(MoveRule::Knight)
        .moves(2, 16)
        .pseudo_random(SEED)
        .many(100);
}

fn bench_board_100_clone(c: &mut Criterion) {
    lazy_static::initialize(&RAND_BOARDS);
    c.bench_function("Board Clone 100", |b| {
        b.iter(|| {
            for board in RAND_BOARDS.iter() {
                black_box(board.clone());
            }
        })
    });
}

fn bench_movegen(c: &mut Criterion) {
    lazy_static::initialize(&RAND_BOARDS);
    lazy_static::initialize(&KNIGHT_BOARDS);
    let mut group = c.benchmark_group("Board Generate Moves 100");
    group.bench_function("King", |b| {
        b.iter(|| {
            for board in RAND_BOARDS.iter() {
                black_box(board.active_moves());
            }
        })
    });
    group.bench_function("Knight", |b| {
        b.iter(|| {
            for board in KNIGHT_BOARDS.iter() {
                black_box(board.active_moves());
            }
        })
    });
    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    lazy_static::initialize(&RAND_BOARDS);
    c.bench_function("Board Forecast All 100", |b| {
        b.iter(|| {
            for board in RAND_BOARDS.iter() {
                for mov in board.active_moves() {
                    black_box(board.forecast_move(mov));
                }
            }
        })
    });
}

criterion_group!(name = board_benches;
    config = Criterion::default().sample_size(100).warm_up_time(Duration::from_millis(5));
    targets = bench_board_100_clone, bench_movegen, bench_forecast
);
