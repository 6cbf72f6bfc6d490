//! Line-of-sight path smoothing.
//!
//! Greedy string pulling: from each anchor, keep the furthest waypoint that
//! is still visible before the first one that is not. The result is not
//! guaranteed to have the fewest possible waypoints.

use log::trace;

use crate::grid::TileGrid;

/// Paths with this many waypoints or fewer are never smoothed
pub const MIN_SMOOTHABLE_LEN: usize = 4;

/// Remove waypoints that a straight segment can skip.
///
/// `line_of_sight(a, b)` decides whether `a` can reach `b` directly. The first
/// and last waypoints are always kept, and every pair of consecutive output
/// waypoints passed `line_of_sight` unless the input pair was adjacent and
/// already failed it.
pub fn smooth<Id, F>(path: &[Id], mut line_of_sight: F) -> Vec<Id>
where
    Id: Copy,
    F: FnMut(Id, Id) -> bool,
{
    if path.len() < MIN_SMOOTHABLE_LEN {
        return path.to_vec();
    }

    let last = path.len() - 1;
    let mut smoothed = vec![path[0]];
    let mut anchor = 0;

    while anchor < last {
        let mut j = anchor + 1;
        while j <= last && line_of_sight(path[anchor], path[j]) {
            j += 1;
        }

        // Take the next waypoint even when it is not visible so the scan
        // always moves forward
        let next = (j - 1).max(anchor + 1);
        smoothed.push(path[next]);
        anchor = next;
    }

    smoothed
}

/// Smooths cell paths against a [`TileGrid`]
pub struct PathSmoother<'a> {
    grid: &'a TileGrid,
}

impl<'a> PathSmoother<'a> {
    /// Create a smoother over `grid`
    pub fn new(grid: &'a TileGrid) -> Self {
        Self { grid }
    }

    /// Smooth a cell path using the grid's line-of-sight test.
    ///
    /// Order is preserved, so a goal-first path stays goal-first.
    pub fn smooth(&self, path: &[usize]) -> Vec<usize> {
        let smoothed = smooth(path, |a, b| self.grid.has_line_of_sight(a, b));
        trace!(
            "[Smoother] {} -> {} waypoints",
            path.len(),
            smoothed.len()
        );
        smoothed
    }
}
