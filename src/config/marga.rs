//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::GridConfig;
use crate::pathfinding::PlannerConfig;

use super::demo::DemoSection;
use super::search::SearchSection;

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Grid dimensions and movement costs
    #[serde(default)]
    pub grid: GridConfig,

    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Demo driver settings
    #[serde(default)]
    pub demo: DemoSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if !(0.0..=1.0).contains(&self.demo.block_chance) {
            return Err(ConfigError::Invalid(format!(
                "block_chance must be within [0, 1], got {}",
                self.demo.block_chance
            )));
        }
        Ok(())
    }

    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        self.grid.clone()
    }

    /// Convert to PlannerConfig
    pub fn to_planner_config(&self) -> PlannerConfig {
        self.search.to_planner_config()
    }
}
