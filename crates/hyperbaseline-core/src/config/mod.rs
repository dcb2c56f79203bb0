//! Configuration system for hyperbaseline.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod aggregation_config;
pub mod hyperbaseline_config;
pub mod scoring_config;
pub mod store_config;

pub use aggregation_config::{AggregationConfig, OwnerSource, RunIdentity};
pub use hyperbaseline_config::{ConfigOverrides, HyperbaselineConfig};
pub use scoring_config::ScoringConfig;
pub use store_config::StoreConfig;
