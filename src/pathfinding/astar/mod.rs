//! A* search over any [`Environment`](crate::environment::Environment).
//!
//! - Open list ordered by `(f, g, id)` with decrease-key on insert
//! - Closed list of finalized nodes, never reopened
//! - Goal-first path reconstruction from parent links

mod closed_list;
mod engine;
mod open_list;
mod reconstruct;
mod types;

pub use closed_list::ClosedList;
pub use engine::AStar;
pub use open_list::OpenList;
pub use reconstruct::reconstruct_path;
pub use types::{SearchNode, SearchStats};
