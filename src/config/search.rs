//! Search configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::PlannerConfig;

use super::defaults;

/// Search settings section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Maximum nodes to expand (omit for unbounded)
    #[serde(default)]
    pub max_expansions: Option<usize>,

    /// Enable line-of-sight smoothing
    #[serde(default = "defaults::enabled")]
    pub smoothing: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_expansions: None,
            smoothing: true,
        }
    }
}

impl SearchSection {
    /// Convert to PlannerConfig
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            max_expansions: self.max_expansions,
            smoothing: self.smoothing,
        }
    }
}
