//! ASCII rendering of grids and solutions.
//!
//! Legend:
//! - `.` free, `X` blocked
//! - `S` start, `E` end (map), `G` goal (solution)
//! - `|`, `-`, `\`, `/` direction from the previous path element
//! - `!` a path element that sits on a blocked cell

use std::collections::HashMap;

use crate::core::CellType;

use super::storage::TileGrid;

/// Render the grid with start and end markers, one text line per row.
pub fn render_map(grid: &TileGrid, start: usize, end: usize) -> String {
    render_with(grid, |id, cell| {
        if id == start {
            'S'
        } else if id == end {
            'E'
        } else {
            cell.as_char()
        }
    })
}

/// Render a goal-first path over the grid.
///
/// The first element is drawn as `G`, the last as `S`, and every element in
/// between with the direction glyph from the element before it.
pub fn render_solution(grid: &TileGrid, path: &[usize]) -> String {
    let mut positions: HashMap<usize, usize> = HashMap::with_capacity(path.len());
    for (index, &id) in path.iter().enumerate() {
        positions.entry(id).or_insert(index);
    }

    render_with(grid, |id, cell| match positions.get(&id) {
        None => cell.as_char(),
        Some(_) if !cell.is_traversable() => '!',
        Some(0) => 'G',
        Some(&index) if index == path.len() - 1 => 'S',
        Some(&index) => direction_glyph(grid, path[index - 1], id),
    })
}

/// Render a path as a space-separated id list
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_with<F>(grid: &TileGrid, mut glyph: F) -> String
where
    F: FnMut(usize, CellType) -> char,
{
    let mut out = String::with_capacity(grid.cell_count() + grid.rows());
    for y in 0..grid.rows() {
        for x in 0..grid.columns() {
            let id = x + y * grid.columns();
            let cell = grid.cell_type(id).unwrap_or(CellType::Blocked);
            out.push(glyph(id, cell));
        }
        out.push('\n');
    }
    out
}

fn direction_glyph(grid: &TileGrid, previous: usize, current: usize) -> char {
    let d = grid.coord_of(previous) - grid.coord_of(current);
    if d.x == 0 {
        '|'
    } else if d.y == 0 {
        '-'
    } else if d.x * d.y > 0 {
        '\\'
    } else {
        '/'
    }
}
