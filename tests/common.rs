//! Test utilities for Marga integration tests.
//!
//! Grid builders and a brute-force reference search.

#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::prelude::*;
use rand::rngs::StdRng;

use marga::{Cost, Environment, GridCoord, TileGrid};

/// Install a test logger once; `RUST_LOG` controls the output.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Grid with each cell blocked independently with probability `chance`.
pub fn random_grid(rows: usize, columns: usize, chance: f64, seed: u64) -> TileGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = TileGrid::new(rows, columns).unwrap();
    for id in 0..grid.cell_count() {
        if rng.random_bool(chance) {
            grid.set_blocked(id);
        }
    }
    grid
}

/// 10x10 grid with column 5 blocked in rows 1 through 8.
pub fn walled_grid() -> TileGrid {
    let mut grid = TileGrid::new(10, 10).unwrap();
    for y in 1..9 {
        grid.set_blocked(5 + y * 10);
    }
    grid
}

/// Cell id at `(x, y)`.
pub fn cell(grid: &TileGrid, x: i32, y: i32) -> usize {
    grid.id_of(GridCoord::new(x, y))
        .unwrap_or_else(|| panic!("({}, {}) outside {}x{} grid", x, y, grid.columns(), grid.rows()))
}

/// All traversable cell ids.
pub fn free_cells(grid: &TileGrid) -> Vec<usize> {
    (0..grid.cell_count())
        .filter(|&id| grid.is_traversable(id))
        .collect()
}

/// Pick `count` (start, goal) pairs among the free cells.
pub fn random_pairs(grid: &TileGrid, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let free = free_cells(grid);
    if free.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = free[rng.random_range(0..free.len())];
            let goal = free[rng.random_range(0..free.len())];
            (start, goal)
        })
        .collect()
}

/// Exact single-source costs by plain Dijkstra (`None` = unreachable).
pub fn dijkstra(grid: &TileGrid, source: usize) -> Vec<Option<Cost>> {
    let mut dist: Vec<Option<Cost>> = vec![None; grid.cell_count()];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((d, id))) = heap.pop() {
        if dist[id].is_some_and(|best| d > best) {
            continue;
        }
        for neighbor in grid.neighbors(id) {
            let candidate = d + neighbor.cost;
            if dist[neighbor.id].is_none_or(|best| candidate < best) {
                dist[neighbor.id] = Some(candidate);
                heap.push(Reverse((candidate, neighbor.id)));
            }
        }
    }

    dist
}
