//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AggregationConfig, OwnerSource, ScoringConfig, StoreConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`HYPERBASELINE_*`)
/// 3. Project config (`hyperbaseline.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HyperbaselineConfig {
    pub store: StoreConfig,
    pub aggregation: AggregationConfig,
    pub scoring: ScoringConfig,
}

/// Overrides supplied by the caller, e.g. command options.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub store_path: Option<String>,
    pub collection: Option<String>,
    pub owner: Option<String>,
    pub method: Option<String>,
    pub threshold: Option<f64>,
    pub debug: Option<bool>,
}

impl HyperbaselineConfig {
    /// Load configuration with layered resolution and validate the result.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &HyperbaselineConfig) -> Result<(), ConfigError> {
        config.scoring.effective_method()?;

        if let Some(threshold) = config.scoring.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.threshold".to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        if let Some(ref collection) = config.store.collection {
            if collection.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "store.collection".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.store.read_pool_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "store.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scoring.cache_capacity == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.aggregation.effective_owner_source() == OwnerSource::Static
            && config.aggregation.owner.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.owner".to_string(),
                message: "required when owner_source is \"static\"".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut HyperbaselineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HyperbaselineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut HyperbaselineConfig, other: &HyperbaselineConfig) {
        // Store
        if other.store.path.is_some() {
            base.store.path = other.store.path.clone();
        }
        if other.store.collection.is_some() {
            base.store.collection = other.store.collection.clone();
        }
        if other.store.read_pool_size.is_some() {
            base.store.read_pool_size = other.store.read_pool_size;
        }

        // Aggregation
        if other.aggregation.owner_source.is_some() {
            base.aggregation.owner_source = other.aggregation.owner_source;
        }
        if other.aggregation.owner.is_some() {
            base.aggregation.owner = other.aggregation.owner.clone();
        }

        // Scoring
        if other.scoring.method.is_some() {
            base.scoring.method = other.scoring.method.clone();
        }
        if other.scoring.threshold.is_some() {
            base.scoring.threshold = other.scoring.threshold;
        }
        if other.scoring.debug.is_some() {
            base.scoring.debug = other.scoring.debug;
        }
        if other.scoring.parallel.is_some() {
            base.scoring.parallel = other.scoring.parallel;
        }
        if other.scoring.cache_capacity.is_some() {
            base.scoring.cache_capacity = other.scoring.cache_capacity;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HYPERBASELINE_STORE_PATH`, `HYPERBASELINE_SCORING_METHOD`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut HyperbaselineConfig) {
        if let Ok(val) = std::env::var("HYPERBASELINE_STORE_PATH") {
            config.store.path = Some(val);
        }
        if let Ok(val) = std::env::var("HYPERBASELINE_STORE_COLLECTION") {
            config.store.collection = Some(val);
        }
        if let Ok(val) = std::env::var("HYPERBASELINE_AGGREGATION_OWNER") {
            config.aggregation.owner = Some(val);
        }
        if let Ok(val) = std::env::var("HYPERBASELINE_SCORING_METHOD") {
            config.scoring.method = Some(val);
        }
        if let Ok(val) = std::env::var("HYPERBASELINE_SCORING_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.scoring.threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HYPERBASELINE_SCORING_DEBUG") {
            if let Ok(v) = val.parse::<bool>() {
                config.scoring.debug = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HYPERBASELINE_SCORING_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.scoring.parallel = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut HyperbaselineConfig, overrides: &ConfigOverrides) {
        if let Some(ref path) = overrides.store_path {
            config.store.path = Some(path.clone());
        }
        if let Some(ref collection) = overrides.collection {
            config.store.collection = Some(collection.clone());
        }
        if let Some(ref owner) = overrides.owner {
            config.aggregation.owner = Some(owner.clone());
        }
        if let Some(ref method) = overrides.method {
            config.scoring.method = Some(method.clone());
        }
        if let Some(threshold) = overrides.threshold {
            config.scoring.threshold = Some(threshold);
        }
        if let Some(debug) = overrides.debug {
            config.scoring.debug = Some(debug);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }
}
