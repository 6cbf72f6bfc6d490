//! Configuration types for the tile grid.

use serde::{Deserialize, Serialize};

use crate::core::Cost;
use crate::error::ConfigError;

/// Integer movement costs for an 8-connected grid.
///
/// The default pair (100, 141) is `100 * (1, sqrt(2))` rounded, which keeps
/// the octile heuristic exact on open ground and admissible everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementCosts {
    /// Cost of a horizontal or vertical step
    pub orthogonal: Cost,
    /// Cost of a diagonal step
    pub diagonal: Cost,
}

impl Default for MovementCosts {
    fn default() -> Self {
        Self {
            orthogonal: 100,
            diagonal: 141,
        }
    }
}

impl MovementCosts {
    /// Create a cost pair
    pub fn new(orthogonal: Cost, diagonal: Cost) -> Self {
        Self {
            orthogonal,
            diagonal,
        }
    }

    /// Reject cost pairs that break octile admissibility or consistency.
    ///
    /// A diagonal step must be no cheaper than one orthogonal step and no more
    /// expensive than two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orthogonal == 0 {
            return Err(ConfigError::Invalid(
                "orthogonal cost must be positive".to_string(),
            ));
        }
        let max_diagonal = self.orthogonal.checked_mul(2).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "orthogonal cost {} is too large",
                self.orthogonal
            ))
        })?;
        if self.diagonal < self.orthogonal || self.diagonal > max_diagonal {
            return Err(ConfigError::Invalid(format!(
                "diagonal cost {} must lie in [{}, {}]",
                self.diagonal, self.orthogonal, max_diagonal
            )));
        }
        Ok(())
    }

    /// Upper bound on any `g + h` a search over a `rows` x `columns` grid
    /// can produce, or `None` if it does not fit in [`Cost`].
    ///
    /// A simple path has at most one step per cell, plus one candidate step
    /// past a closed node and a heuristic spanning the longer side.
    pub fn worst_case_cost(&self, rows: usize, columns: usize) -> Option<Cost> {
        let rows = u64::try_from(rows).ok()?;
        let columns = u64::try_from(columns).ok()?;
        let steps = rows
            .checked_mul(columns)?
            .checked_add(rows.max(columns))?
            .checked_add(1)?;
        let bound = steps.checked_mul(u64::from(self.diagonal))?;
        Cost::try_from(bound).ok()
    }

    /// Cost of a unit step
    #[inline]
    pub fn step(&self, diagonal: bool) -> Cost {
        if diagonal {
            self.diagonal
        } else {
            self.orthogonal
        }
    }

    /// Octile distance for absolute offsets `dx`, `dy` (in cells).
    ///
    /// Saturates at `Cost::MAX`; grids built through [`GridConfig::validate`]
    /// never reach it.
    #[inline]
    pub fn octile(&self, dx: u32, dy: u32) -> Cost {
        let (short, long) = if dx > dy { (dy, dx) } else { (dx, dy) };
        short
            .saturating_mul(self.diagonal)
            .saturating_add((long - short).saturating_mul(self.orthogonal))
    }
}

/// Grid configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (y extent)
    pub rows: usize,

    /// Number of columns (x extent)
    pub columns: usize,

    /// Movement costs
    #[serde(default)]
    pub costs: MovementCosts,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            columns: 50,
            costs: MovementCosts::default(),
        }
    }
}

impl GridConfig {
    /// Create a configuration with default movement costs
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            costs: MovementCosts::default(),
        }
    }

    /// Check dimensions and costs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.columns
            )));
        }
        if i32::try_from(self.rows).is_err() || i32::try_from(self.columns).is_err() {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} exceeds coordinate range",
                self.rows, self.columns
            )));
        }
        self.costs.validate()?;
        if self.costs.worst_case_cost(self.rows, self.columns).is_none() {
            return Err(ConfigError::Invalid(format!(
                "path costs on a {}x{} grid with diagonal cost {} overflow",
                self.rows, self.columns, self.costs.diagonal
            )));
        }
        Ok(())
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
