//! Demo driver configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Random map settings for the demo binary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoSection {
    /// Probability that a cell is seeded as blocked
    #[serde(default = "defaults::block_chance")]
    pub block_chance: f64,

    /// RNG seed (omit for a random map on every run)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            block_chance: 0.25,
            seed: None,
        }
    }
}
