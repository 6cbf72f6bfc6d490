//! Path planning.
//!
//! - **A\* Search**: minimum-cost paths over any [`Environment`](crate::environment::Environment)
//! - **Path Smoothing**: drop waypoints that have a direct line of sight
//! - **Grid Planner**: both of the above on a [`TileGrid`](crate::grid::TileGrid)
//!
//! ## A* Pathfinding
//!
//! ```rust
//! use marga::grid::TileGrid;
//! use marga::pathfinding::AStar;
//!
//! let grid = TileGrid::new(5, 5).unwrap();
//! let mut astar = AStar::new();
//!
//! let stats = astar.find_path(&grid, 0, 24).unwrap();
//! assert_eq!(stats.cost, 4 * 141);
//!
//! // Goal first, start last
//! let path = astar.result_path().unwrap();
//! assert_eq!(path, vec![24, 18, 12, 6, 0]);
//! ```
//!
//! ## Planning with Smoothing
//!
//! ```rust
//! use marga::grid::TileGrid;
//! use marga::pathfinding::GridPlanner;
//!
//! let grid = TileGrid::from_ascii(
//!     "
//!     .....
//!     ..X..
//!     .....
//!     ",
//! )
//! .unwrap();
//!
//! let mut planner = GridPlanner::with_defaults(&grid);
//! let planned = planner.plan(5, 9).unwrap();
//! assert!(planned.waypoints.len() <= planned.raw.len());
//! ```

pub mod astar;
pub mod planner;
pub mod smoothing;

pub use astar::{AStar, ClosedList, OpenList, SearchNode, SearchStats, reconstruct_path};
pub use planner::{GridPlanner, PlannedPath, PlannerConfig, find_path, path_exists};
pub use smoothing::{PathSmoother, smooth};
