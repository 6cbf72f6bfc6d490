//! Tile grid environment.
//!
//! The grid is the concrete [`Environment`](crate::environment::Environment)
//! used by the planner and the demo:
//!
//! - [`TileGrid`]: passable/blocked tiles, 8-connected neighbors, octile heuristic
//! - [`MovementCosts`] / [`GridConfig`]: pluggable integer step costs
//! - [`segment_is_clear`]: exact integer line-of-sight walk used for smoothing
//! - [`render_map`] / [`render_solution`]: console output
//!
//! ```rust
//! use marga::grid::TileGrid;
//!
//! let grid = TileGrid::from_ascii("
//!     ....
//!     .XX.
//!     ....
//! ").unwrap();
//!
//! assert!(grid.has_line_of_sight(0, 3));
//! assert!(!grid.has_line_of_sight(4, 7));
//! ```

mod config;
mod line_of_sight;
mod render;
mod storage;

pub use config::{GridConfig, MovementCosts};
pub use line_of_sight::segment_is_clear;
pub use render::{format_path, render_map, render_solution};
pub use storage::TileGrid;
