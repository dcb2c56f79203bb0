//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::errors::ConfigError;
use crate::types::OutlierMethod;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// One of `ESD`, `Hampel`, `SBR`, `ASBR`. Default: `Hampel`.
    pub method: Option<String>,
    /// Threshold override. `0` means "use the method default".
    pub threshold: Option<f64>,
    /// Attach bounds and the source baseline to scored records. Default: false.
    pub debug: Option<bool>,
    /// Score records on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Baseline lookups memoized per scorer. Default: 10 000.
    pub cache_capacity: Option<u64>,
}

impl ScoringConfig {
    pub fn effective_method(&self) -> Result<OutlierMethod, ConfigError> {
        match &self.method {
            Some(name) => name.parse(),
            None => Ok(OutlierMethod::default()),
        }
    }

    /// The threshold override, if any. Zero counts as unset.
    pub fn effective_threshold(&self) -> Option<f64> {
        self.threshold.filter(|t| *t != 0.0)
    }

    pub fn effective_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }
}
