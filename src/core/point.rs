//! Grid coordinate type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Unit offsets of the 8-neighborhood, row by row from the top-left.
    pub const NEIGHBOR_OFFSETS_8: [GridCoord; 8] = [
        GridCoord { x: -1, y: -1 },
        GridCoord { x: 0, y: -1 },
        GridCoord { x: 1, y: -1 },
        GridCoord { x: -1, y: 0 },
        GridCoord { x: 1, y: 0 },
        GridCoord { x: -1, y: 1 },
        GridCoord { x: 0, y: 1 },
        GridCoord { x: 1, y: 1 },
    ];

    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Is this a diagonal unit step?
    #[inline]
    pub fn is_diagonal_step(&self) -> bool {
        self.x != 0 && self.y != 0
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}
