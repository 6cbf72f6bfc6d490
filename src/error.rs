//! Error types for Marga

use thiserror::Error;

/// Pathfinding error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Frontier exhausted before the goal was reached
    #[error("No path found: frontier exhausted before reaching the goal")]
    NoPathFound,

    /// Start or goal is outside the environment or not traversable
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Path requested before a successful search
    #[error("No result available: run a successful search before reconstructing the path")]
    ReconstructionWithoutResult,

    /// A parent link points at a node that was never closed
    #[error("Node not finalized: {0}")]
    NodeNotFinalized(String),

    /// Bounded search closed more nodes than allowed
    #[error("Expansion limit reached after {limit} nodes")]
    ExpansionLimitReached {
        /// Maximum number of expansions that were allowed
        limit: usize,
    },

    /// An accumulated path cost does not fit in [`Cost`](crate::core::Cost)
    #[error("Path cost overflow: edge costs exceed the cost range")]
    CostOverflow,
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, PathError>;
