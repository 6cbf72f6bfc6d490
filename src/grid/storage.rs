//! Tile grid storage and its [`Environment`] implementation.

use crate::core::{CellType, Cost, GridCoord};
use crate::environment::{Environment, Neighbor};
use crate::error::ConfigError;

use super::config::{GridConfig, MovementCosts};

/// Row-major tile grid.
///
/// Cell identities are `x + y * columns`, with `(0, 0)` at the top-left and
/// `y` growing downwards (one text line per row when rendered).
#[derive(Clone, Debug)]
pub struct TileGrid {
    /// Cell types, row-major
    cells: Vec<CellType>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    columns: usize,
    /// Step costs used by neighbor enumeration and the heuristic
    costs: MovementCosts,
}

impl TileGrid {
    /// Create an all-free grid with default movement costs
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GridConfig::new(rows, columns))
    }

    /// Create an all-free grid with custom movement costs
    pub fn with_costs(
        rows: usize,
        columns: usize,
        costs: MovementCosts,
    ) -> Result<Self, ConfigError> {
        Self::from_config(&GridConfig {
            rows,
            columns,
            costs,
        })
    }

    /// Create an all-free grid from a configuration.
    ///
    /// Fails unless the grid has at least one cell and every path cost on it
    /// fits in [`Cost`].
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cells: vec![CellType::Free; config.rows * config.columns],
            rows: config.rows,
            columns: config.columns,
            costs: config.costs,
        })
    }

    /// Parse an ASCII map: one line per row, `.` free, `X` or `#` blocked.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(map: &str) -> Result<Self, ConfigError> {
        let lines: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let columns = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Self::from_config(&GridConfig::new(lines.len(), columns))?;

        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(ConfigError::Invalid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    line.chars().count(),
                    columns
                )));
            }
            for (x, c) in line.chars().enumerate() {
                let cell = CellType::from_char(c).ok_or_else(|| {
                    ConfigError::Invalid(format!("unknown map character {:?} at ({}, {})", c, x, y))
                })?;
                grid.cells[x + y * columns] = cell;
            }
        }

        Ok(grid)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Movement costs
    #[inline]
    pub fn costs(&self) -> MovementCosts {
        self.costs
    }

    /// Check if coordinates are inside the grid
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.columns
            && (coord.y as usize) < self.rows
    }

    /// Cell identity for coordinates, `None` outside the grid
    #[inline]
    pub fn id_of(&self, coord: GridCoord) -> Option<usize> {
        self.is_valid_coord(coord)
            .then(|| coord.x as usize + coord.y as usize * self.columns)
    }

    /// Coordinates of a cell identity.
    ///
    /// Identities past the last cell map to rows below the grid.
    #[inline]
    pub fn coord_of(&self, id: usize) -> GridCoord {
        GridCoord::new((id % self.columns) as i32, (id / self.columns) as i32)
    }

    /// Cell type at `id`, `None` outside the grid
    #[inline]
    pub fn cell_type(&self, id: usize) -> Option<CellType> {
        self.cells.get(id).copied()
    }

    /// Cell type at coordinates, `None` outside the grid
    #[inline]
    pub fn cell_type_at(&self, coord: GridCoord) -> Option<CellType> {
        self.id_of(coord).and_then(|id| self.cell_type(id))
    }

    /// Set the cell type. Returns false if `id` is outside the grid.
    pub fn set_type(&mut self, id: usize, cell: CellType) -> bool {
        match self.cells.get_mut(id) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Mark a cell as an obstacle
    pub fn set_blocked(&mut self, id: usize) -> bool {
        self.set_type(id, CellType::Blocked)
    }

    /// Mark a cell as passable
    pub fn set_free(&mut self, id: usize) -> bool {
        self.set_type(id, CellType::Free)
    }

    /// Is the cell at coordinates inside the grid and passable?
    #[inline]
    pub fn is_free_at(&self, coord: GridCoord) -> bool {
        self.cell_type_at(coord)
            .is_some_and(CellType::is_traversable)
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_traversable()).count()
    }

    /// Euclidean length of a cell path, in cells
    pub fn path_length(&self, path: &[usize]) -> f32 {
        path.windows(2)
            .map(|w| {
                let d = self.coord_of(w[1]) - self.coord_of(w[0]);
                ((d.x * d.x + d.y * d.y) as f32).sqrt()
            })
            .sum()
    }
}

impl Environment for TileGrid {
    type NodeId = usize;

    fn neighbors(&self, id: usize) -> Vec<Neighbor<usize>> {
        let center = self.coord_of(id);
        GridCoord::NEIGHBOR_OFFSETS_8
            .iter()
            .filter_map(|&offset| {
                let neighbor = self.id_of(center + offset)?;
                self.is_traversable(neighbor).then(|| {
                    Neighbor::new(neighbor, self.costs.step(offset.is_diagonal_step()))
                })
            })
            .collect()
    }

    fn heuristic(&self, from: usize, to: usize) -> Cost {
        let a = self.coord_of(from);
        let b = self.coord_of(to);
        self.costs.octile(a.x.abs_diff(b.x), a.y.abs_diff(b.y))
    }

    fn is_traversable(&self, id: usize) -> bool {
        self.cell_type(id).is_some_and(CellType::is_traversable)
    }

    fn contains(&self, id: usize) -> bool {
        id < self.cells.len()
    }
}
