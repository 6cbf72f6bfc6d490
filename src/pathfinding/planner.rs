//! Grid planner: search, reconstruct, then smooth.

use log::{debug, trace};

use crate::core::Cost;
use crate::error::Result;
use crate::grid::TileGrid;

use super::astar::AStar;
use super::smoothing::PathSmoother;

/// Planner configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of nodes to expand before giving up (`None` = unbounded)
    pub max_expansions: Option<usize>,
    /// Smooth the raw path with line-of-sight shortcuts
    pub smoothing: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            smoothing: true,
        }
    }
}

/// Result of a successful plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedPath {
    /// Raw cell path, goal first
    pub raw: Vec<usize>,
    /// Smoothed waypoints, goal first (equal to `raw` when smoothing is off)
    pub waypoints: Vec<usize>,
    /// Cost of the raw path
    pub cost: Cost,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

impl PlannedPath {
    /// Start cell
    pub fn start(&self) -> Option<usize> {
        self.raw.last().copied()
    }

    /// Goal cell
    pub fn goal(&self) -> Option<usize> {
        self.raw.first().copied()
    }

    /// Raw path in travel order (start first)
    pub fn raw_start_first(&self) -> Vec<usize> {
        self.raw.iter().rev().copied().collect()
    }

    /// Waypoints in travel order (start first)
    pub fn waypoints_start_first(&self) -> Vec<usize> {
        self.waypoints.iter().rev().copied().collect()
    }
}

/// A* planner bound to one grid.
///
/// Owns its engine, so repeated calls to [`plan`](Self::plan) reuse the
/// search buffers.
pub struct GridPlanner<'a> {
    grid: &'a TileGrid,
    config: PlannerConfig,
    engine: AStar<usize>,
}

impl<'a> GridPlanner<'a> {
    /// Create a planner
    pub fn new(grid: &'a TileGrid, config: PlannerConfig) -> Self {
        Self {
            grid,
            config,
            engine: AStar::new(),
        }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a TileGrid) -> Self {
        Self::new(grid, PlannerConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Cells closed by the last search, in order
    pub fn expansion_order(&self) -> &[usize] {
        self.engine.expansion_order()
    }

    /// Find a path from `start` to `goal` and smooth it if enabled
    pub fn plan(&mut self, start: usize, goal: usize) -> Result<PlannedPath> {
        trace!(
            "[Planner] plan: start={} ({:?}) goal={} ({:?})",
            start,
            self.grid.coord_of(start),
            goal,
            self.grid.coord_of(goal)
        );

        let stats = match self.config.max_expansions {
            Some(limit) => self
                .engine
                .find_path_bounded(self.grid, start, goal, limit),
            None => self.engine.find_path(self.grid, start, goal),
        }
        .inspect_err(|e| debug!("[Planner] FAILED: {}", e))?;

        let raw = self.engine.result_path()?;
        let waypoints = if self.config.smoothing {
            PathSmoother::new(self.grid).smooth(&raw)
        } else {
            raw.clone()
        };

        trace!(
            "[Planner] SUCCESS: {} cells, {} waypoints, cost={}, nodes_expanded={}",
            raw.len(),
            waypoints.len(),
            stats.cost,
            stats.nodes_expanded
        );

        Ok(PlannedPath {
            raw,
            waypoints,
            cost: stats.cost,
            nodes_expanded: stats.nodes_expanded,
        })
    }
}

/// Quick path finding with default configuration
pub fn find_path(grid: &TileGrid, start: usize, goal: usize) -> Result<PlannedPath> {
    GridPlanner::with_defaults(grid).plan(start, goal)
}

/// Check if a path exists
pub fn path_exists(grid: &TileGrid, start: usize, goal: usize) -> bool {
    AStar::new().find_path(grid, start, goal).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use crate::error::PathError;

    fn create_test_grid() -> TileGrid {
        TileGrid::from_ascii(
            "
            ..........
            ..........
            .....X....
            .....X....
            .....X....
            .....X....
            .....X....
            ..........
            ",
        )
        .unwrap()
    }

    #[test]
    fn test_plan_smooths_by_default() {
        let grid = create_test_grid();
        let mut planner = GridPlanner::with_defaults(&grid);

        let start = grid.id_of(GridCoord::new(2, 4)).unwrap();
        let goal = grid.id_of(GridCoord::new(8, 4)).unwrap();
        let planned = planner.plan(start, goal).unwrap();

        assert_eq!(planned.goal(), Some(goal));
        assert_eq!(planned.start(), Some(start));
        assert!(planned.waypoints.len() < planned.raw.len());
        assert_eq!(planned.waypoints.first(), Some(&goal));
        assert_eq!(planned.waypoints.last(), Some(&start));
        assert_eq!(planned.nodes_expanded, planner.expansion_order().len());
        for pair in planned.waypoints.windows(2) {
            assert!(grid.has_line_of_sight(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_plan_without_smoothing() {
        let grid = create_test_grid();
        let config = PlannerConfig {
            smoothing: false,
            ..Default::default()
        };
        let mut planner = GridPlanner::new(&grid, config);

        let planned = planner.plan(0, 79).unwrap();
        assert_eq!(planned.waypoints, planned.raw);
    }

    #[test]
    fn test_start_first_views() {
        let grid = TileGrid::new(1, 4).unwrap();
        let planned = find_path(&grid, 0, 3).unwrap();

        assert_eq!(planned.raw, vec![3, 2, 1, 0]);
        assert_eq!(planned.raw_start_first(), vec![0, 1, 2, 3]);
        assert_eq!(planned.waypoints, vec![3, 0]);
        assert_eq!(planned.waypoints_start_first(), vec![0, 3]);
        assert_eq!(planned.cost, 300);
    }

    #[test]
    fn test_expansion_cap() {
        let grid = create_test_grid();
        let config = PlannerConfig {
            max_expansions: Some(5),
            ..Default::default()
        };
        let mut planner = GridPlanner::new(&grid, config);

        assert_eq!(
            planner.plan(0, 79),
            Err(PathError::ExpansionLimitReached { limit: 5 })
        );
    }

    #[test]
    fn test_no_path() {
        let grid = TileGrid::from_ascii(
            "
            ..X..
            ..X..
            ..X..
            ",
        )
        .unwrap();

        assert_eq!(find_path(&grid, 0, 4), Err(PathError::NoPathFound));
        assert!(!path_exists(&grid, 0, 4));
        assert!(path_exists(&grid, 0, 10));
    }

    #[test]
    fn test_blocked_endpoints() {
        let grid = create_test_grid();
        assert!(matches!(
            find_path(&grid, 25, 0),
            Err(PathError::InvalidNode(_))
        ));
        assert!(matches!(
            find_path(&grid, 0, 1000),
            Err(PathError::InvalidNode(_))
        ));
    }
}
