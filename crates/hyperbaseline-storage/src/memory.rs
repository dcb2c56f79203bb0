//! In-memory [`StatisticsStore`].

use std::sync::RwLock;

use hyperbaseline_core::errors::StorageError;
use hyperbaseline_core::traits::StatisticsStore;
use hyperbaseline_core::types::BaselineStat;
use rustc_hash::FxHashMap;

/// Baselines held in a map keyed by the rendered baseline key.
#[derive(Default)]
pub struct MemoryStatisticsStore {
    records: RwLock<FxHashMap<String, BaselineStat>>,
}

impl MemoryStatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StatisticsStore for MemoryStatisticsStore {
    fn get(&self, key: &str) -> Result<Option<BaselineStat>, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::Unavailable {
            message: "memory store lock poisoned".to_string(),
        })?;
        Ok(records.get(key).cloned())
    }

    fn put_batch(&self, records: &[BaselineStat]) -> Result<usize, StorageError> {
        let mut map = self.records.write().map_err(|_| StorageError::Unavailable {
            message: "memory store lock poisoned".to_string(),
        })?;
        for stat in records {
            map.insert(stat.key.clone(), stat.clone());
        }
        Ok(records.len())
    }
}
