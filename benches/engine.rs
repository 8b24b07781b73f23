use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, EngineConfig, GameEngine};

fn bench_tick(c: &mut Criterion) {
    let mut eng = GameEngine::new(EngineConfig::seeded(12345)).unwrap();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if eng.is_game_over() {
                eng.initialize();
            }
            black_box(eng.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20).unwrap();
            for y in 16..20 {
                for x in 0..10 {
                    board.set_filled(x, y);
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_horizontal_move(c: &mut Criterion) {
    let mut eng = GameEngine::new(EngineConfig::seeded(12345)).unwrap();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(eng.move_left());
            black_box(eng.move_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut eng = GameEngine::new(EngineConfig::seeded(12345)).unwrap();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(eng.rotate());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_horizontal_move,
    bench_rotate
);
criterion_main!(benches);
