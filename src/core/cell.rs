//! Cell types for the tile grid.

use serde::{Deserialize, Serialize};

/// What occupies a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    /// Traversable tile
    #[default]
    Free = 0,

    /// Obstacle tile, never entered by a path
    Blocked = 1,
}

impl CellType {
    /// Can a path pass through this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellType::Free)
    }

    /// Parse a map character (`.` free, `X`/`#` blocked)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellType::Free),
            'X' | 'x' | '#' => Some(CellType::Blocked),
            _ => None,
        }
    }

    /// Single character representation for rendering
    pub fn as_char(self) -> char {
        match self {
            CellType::Free => '.',
            CellType::Blocked => 'X',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_traversable() {
        assert!(CellType::Free.is_traversable());
        assert!(!CellType::Blocked.is_traversable());
        assert_eq!(CellType::default(), CellType::Free);
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(CellType::from_char('.'), Some(CellType::Free));
        assert_eq!(CellType::from_char('X'), Some(CellType::Blocked));
        assert_eq!(CellType::from_char('#'), Some(CellType::Blocked));
        assert_eq!(CellType::from_char('S'), None);

        for cell in [CellType::Free, CellType::Blocked] {
            assert_eq!(CellType::from_char(cell.as_char()), Some(cell));
        }
    }
}
