//! Core types shared by the search engine and the grid environment.
//!
//! - [`CellType`]: passable or blocked tile
//! - [`GridCoord`]: integer cell coordinates with the 8-neighborhood
//! - [`Cost`]: integer path cost

mod cell;
mod point;

pub use cell::CellType;
pub use point::GridCoord;

/// Integer movement cost.
///
/// Sums are exact, so equal `f` values compare equal in the open list.
pub type Cost = u32;
