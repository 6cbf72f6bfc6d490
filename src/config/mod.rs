//! Unified configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod demo;
mod marga;
mod search;

pub use demo::DemoSection;
pub use marga::MargaConfig;
pub use search::SearchSection;
