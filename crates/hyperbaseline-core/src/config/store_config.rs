//! Statistics store configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLLECTION, DEFAULT_DB_FILE, DEFAULT_READ_POOL_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database path. Default: `hyperbaseline.db`.
    pub path: Option<String>,
    /// Collection baselines are written to. Default: `hyperbaseline`.
    pub collection: Option<String>,
    /// Read-only connections in the pool. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StoreConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_DB_FILE)
    }

    pub fn effective_collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE)
    }
}
