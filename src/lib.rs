//! # Marga: A* Grid Pathfinding
//!
//! Minimum-cost paths on 8-connected tile grids, simplified into waypoints
//! with an exact integer line-of-sight test.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{GridPlanner, TileGrid};
//!
//! let grid = TileGrid::from_ascii(
//!     "
//!     .....X....
//!     .....X....
//!     .....X....
//!     ..........
//!     ",
//! )
//! .unwrap();
//!
//! let mut planner = GridPlanner::with_defaults(&grid);
//! let planned = planner.plan(0, 9).unwrap();
//!
//! // Paths are goal-first
//! assert_eq!(planned.raw.first(), Some(&9));
//! assert_eq!(planned.raw.last(), Some(&0));
//! println!("cost={} waypoints={:?}", planned.cost, planned.waypoints);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Grid coordinates, cell types, cost type
//! - [`environment`]: The capability trait the search runs against
//! - [`grid`]: Tile grid environment, line of sight, console rendering
//! - [`pathfinding`]: A* engine, path smoothing, grid planner
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   TileGrid (Environment)
//!          │ neighbors / heuristic
//!          ▼
//!   AStar::find_path ──► result_path (goal first)
//!                               │
//!                               ▼
//!                       PathSmoother (line of sight)
//!                               │
//!                               ▼
//!                          waypoints
//! ```
//!
//! ## Costs
//!
//! Costs are integers. The defaults are 100 per orthogonal step and 141 per
//! diagonal step, with octile distance as the heuristic.

pub mod config;
pub mod core;
pub mod environment;
pub mod error;
pub mod grid;
pub mod pathfinding;

pub use config::MargaConfig;
pub use core::{CellType, Cost, GridCoord};
pub use environment::{Environment, Neighbor, path_cost};
pub use error::{ConfigError, PathError, Result};
pub use grid::{GridConfig, MovementCosts, TileGrid};
pub use pathfinding::{AStar, GridPlanner, PathSmoother, PlannedPath, PlannerConfig, SearchStats};
