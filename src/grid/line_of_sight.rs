//! Exact integer line-of-sight test between cell centers.
//!
//! Cell `(x, y)` has its center at `(2x + 1, 2y + 1)` in doubled coordinates,
//! so every center is odd and every grid line is even. The segment between
//! two centers satisfies
//!
//! ```text
//! offset_x * Y = offset_y * X + b      b = offset_x * Y1 - offset_y * X1
//! ```
//!
//! and is walked one grid line at a time along its longer axis. At each
//! crossing the minor coordinate is a rational number; floor division gives
//! the row (or column) it falls in, and the cells on both sides of the
//! crossing are tested. When a crossing lands exactly on a grid vertex (which
//! happens at every crossing of a 45° segment) the segment only enters the two
//! cells diagonally across that vertex, so the other two corner cells do not
//! block it. This matches diagonal moves in the search, which may cut corners.

use crate::core::GridCoord;

use super::storage::TileGrid;

impl TileGrid {
    /// Does the straight segment between the centers of `from` and `to`
    /// cross only traversable cells?
    ///
    /// Both endpoints are tested, so a cell sees itself only when it is
    /// traversable. Ids outside the grid are never visible.
    pub fn has_line_of_sight(&self, from: usize, to: usize) -> bool {
        if from >= self.cell_count() || to >= self.cell_count() {
            return false;
        }
        segment_is_clear(self.coord_of(from), self.coord_of(to), |c| {
            self.is_free_at(c)
        })
    }
}

/// Walk every cell the segment between two cell centers passes through and
/// check it with `is_clear`. Stops at the first blocked cell.
///
/// `from == to` is visible iff that cell is clear.
pub fn segment_is_clear<F>(from: GridCoord, to: GridCoord, mut is_clear: F) -> bool
where
    F: FnMut(GridCoord) -> bool,
{
    if !is_clear(from) {
        return false;
    }
    if from == to {
        return true;
    }
    if !is_clear(to) {
        return false;
    }

    let (x1, y1) = doubled_center(from);
    let (x2, y2) = doubled_center(to);
    let offset_x = x2 - x1;
    let offset_y = y2 - y1;

    if offset_x.abs() >= offset_y.abs() {
        // x-major: crossings are the vertical grid lines X = 2k
        let b = offset_x * y1 - offset_y * x1;
        walk_crossings(
            (from.x, to.x),
            (offset_x, offset_y),
            b,
            |major, minor| GridCoord::new(major, minor),
            &mut is_clear,
        )
    } else {
        // y-major: same line with the axes swapped, offset_y * X = offset_x * Y + b
        let b = offset_y * x1 - offset_x * y1;
        walk_crossings(
            (from.y, to.y),
            (offset_y, offset_x),
            b,
            |major, minor| GridCoord::new(minor, major),
            &mut is_clear,
        )
    }
}

#[inline]
fn doubled_center(c: GridCoord) -> (i64, i64) {
    (2 * c.x as i64 + 1, 2 * c.y as i64 + 1)
}

/// Test the cells on both sides of every major-axis grid line strictly
/// between the two endpoint cells.
///
/// The line is `offset_major * minor = offset_minor * major + b` in doubled
/// coordinates, with `offset_major != 0` and `|offset_minor| <= |offset_major|`.
fn walk_crossings<F, C>(
    (start_major, end_major): (i32, i32),
    (offset_major, offset_minor): (i64, i64),
    b: i64,
    to_coord: C,
    is_clear: &mut F,
) -> bool
where
    F: FnMut(GridCoord) -> bool,
    C: Fn(i32, i32) -> GridCoord,
{
    // Normalize so the denominator is positive and floor division is exact
    let sign = offset_major.signum();
    let two_den = 2 * offset_major.abs();
    let rising = offset_major * offset_minor > 0;

    let lo = start_major.min(end_major);
    let hi = start_major.max(end_major);

    for k in (lo + 1)..=hi {
        let boundary = 2 * k as i64;
        let numerator = (offset_minor * boundary + b) * sign;
        let cell = numerator.div_euclid(two_den) as i32;

        let (before, after) = if numerator.rem_euclid(two_den) == 0 {
            // Exactly on a vertex at minor line 2 * cell
            if rising {
                (cell - 1, cell)
            } else {
                (cell, cell - 1)
            }
        } else {
            (cell, cell)
        };

        if !is_clear(to_coord(k - 1, before)) || !is_clear(to_coord(k, after)) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Collect every cell the segment visits
    fn visited(from: GridCoord, to: GridCoord) -> BTreeSet<(i32, i32)> {
        let mut cells = BTreeSet::new();
        segment_is_clear(from, to, |c| {
            cells.insert((c.x, c.y));
            true
        });
        cells
    }

    fn set(cells: &[(i32, i32)]) -> BTreeSet<(i32, i32)> {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_same_cell() {
        let grid = TileGrid::from_ascii("..\n.X").unwrap();
        assert!(grid.has_line_of_sight(0, 0));
        // A blocked cell does not see itself
        assert!(!grid.has_line_of_sight(3, 3));
    }

    #[test]
    fn test_out_of_range() {
        let grid = TileGrid::new(2, 2).unwrap();
        assert!(!grid.has_line_of_sight(0, 4));
        assert!(!grid.has_line_of_sight(9, 0));
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(
            visited(GridCoord::new(0, 1), GridCoord::new(3, 1)),
            set(&[(0, 1), (1, 1), (2, 1), (3, 1)])
        );
        assert_eq!(
            visited(GridCoord::new(2, 3), GridCoord::new(2, 0)),
            set(&[(2, 0), (2, 1), (2, 2), (2, 3)])
        );
    }

    #[test]
    fn test_shallow_slope() {
        // Center (0.5, 0.5) -> (2.5, 1.5) crosses y = 1 at x = 1.5
        assert_eq!(
            visited(GridCoord::new(0, 0), GridCoord::new(2, 1)),
            set(&[(0, 0), (1, 0), (1, 1), (2, 1)])
        );
    }

    #[test]
    fn test_steep_slope() {
        assert_eq!(
            visited(GridCoord::new(0, 0), GridCoord::new(1, 2)),
            set(&[(0, 0), (0, 1), (1, 1), (1, 2)])
        );
    }

    #[test]
    fn test_diagonal_skips_corner_cells() {
        assert_eq!(
            visited(GridCoord::new(0, 0), GridCoord::new(2, 2)),
            set(&[(0, 0), (1, 1), (2, 2)])
        );
        assert_eq!(
            visited(GridCoord::new(2, 0), GridCoord::new(0, 2)),
            set(&[(2, 0), (1, 1), (0, 2)])
        );
    }

    #[test]
    fn test_vertex_on_non_diagonal_slope() {
        // (0,0) -> (3,1): doubled (1,1) -> (7,3) passes the vertex (4,2)
        assert_eq!(
            visited(GridCoord::new(0, 0), GridCoord::new(3, 1)),
            set(&[(0, 0), (1, 0), (2, 1), (3, 1)])
        );
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (GridCoord::new(0, 0), GridCoord::new(5, 2)),
            (GridCoord::new(4, 1), GridCoord::new(0, 3)),
            (GridCoord::new(1, 5), GridCoord::new(2, 0)),
            (GridCoord::new(3, 3), GridCoord::new(0, 0)),
        ];
        for (a, b) in pairs {
            assert_eq!(visited(a, b), visited(b, a), "{:?} <-> {:?}", a, b);
        }
    }

    #[test]
    fn test_blocked_between() {
        let grid = TileGrid::from_ascii(
            "
            .....
            ..X..
            .....
            ",
        )
        .unwrap();
        // Row 1 passes straight through the obstacle
        assert!(!grid.has_line_of_sight(5, 9));
        // Row 0 and row 2 are clear
        assert!(grid.has_line_of_sight(0, 4));
        assert!(grid.has_line_of_sight(10, 14));
        // Corner to corner passes through the center cell (2,1)
        assert!(!grid.has_line_of_sight(0, 14));
        // Steep segment next to the obstacle
        assert!(grid.has_line_of_sight(1, 11));
    }

    #[test]
    fn test_diagonal_squeeze_between_obstacles() {
        let grid = TileGrid::from_ascii(
            "
            .X
            X.
            ",
        )
        .unwrap();
        assert!(grid.has_line_of_sight(0, 3));
        assert!(!grid.has_line_of_sight(1, 2));
    }
}
