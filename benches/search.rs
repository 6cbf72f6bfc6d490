//! Benchmark A* search and path smoothing.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;
use rand::rngs::StdRng;

use marga::{AStar, Environment, PathSmoother, TileGrid};

/// Random grid with a guaranteed free corner-to-corner diagonal.
fn bench_grid(size: usize, chance: f64) -> TileGrid {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = TileGrid::new(size, size).unwrap();
    for id in 0..grid.cell_count() {
        if rng.random_bool(chance) {
            grid.set_blocked(id);
        }
    }
    for i in 0..size {
        grid.set_free(i + i * size);
    }
    grid
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");

    for size in [32, 64, 128] {
        let grid = bench_grid(size, 0.25);
        let goal = grid.cell_count() - 1;
        let mut astar = AStar::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let stats = astar.find_path(&grid, black_box(0), black_box(goal));
                black_box(stats)
            })
        });
    }

    group.finish();
}

fn bench_open_grid(c: &mut Criterion) {
    let grid = TileGrid::new(100, 100).unwrap();
    let mut astar = AStar::new();

    c.bench_function("find_path_open_100", |b| {
        b.iter(|| black_box(astar.find_path(&grid, black_box(99), black_box(9900))))
    });
}

fn bench_smoothing(c: &mut Criterion) {
    let grid = bench_grid(64, 0.2);
    let mut astar = AStar::new();
    let raw = match astar.find_path(&grid, 0, grid.cell_count() - 1) {
        Ok(_) => astar.result_path().unwrap_or_default(),
        Err(_) => Vec::new(),
    };
    let smoother = PathSmoother::new(&grid);

    c.bench_function("smooth_64", |b| b.iter(|| black_box(smoother.smooth(black_box(&raw)))));
}

fn bench_line_of_sight(c: &mut Criterion) {
    let grid = TileGrid::new(256, 256).unwrap();
    let far = grid.cell_count() - 1;

    c.bench_function("line_of_sight_256", |b| {
        b.iter(|| black_box(grid.has_line_of_sight(black_box(0), black_box(far))))
    });
}

fn bench_neighbors(c: &mut Criterion) {
    let grid = bench_grid(64, 0.25);

    c.bench_function("neighbors_64", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for id in 0..grid.cell_count() {
                total += grid.neighbors(black_box(id)).len();
            }
            black_box(total)
        })
    });
}

criterion_group!(
    benches,
    bench_find_path,
    bench_open_grid,
    bench_smoothing,
    bench_line_of_sight,
    bench_neighbors
);
criterion_main!(benches);
