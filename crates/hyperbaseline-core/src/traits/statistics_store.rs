//! StatisticsStore trait: keyed persistence for baseline records.
//!
//! The engine never knows how baselines travel. `hyperbaseline-storage`
//! provides SQLite and in-memory implementations; hosts can plug in a
//! remote key-value store.

use crate::errors::StorageError;
use crate::types::BaselineStat;

/// Outcome of a single baseline lookup.
///
/// A miss is a normal cold-start outcome; a transport error is not, and the
/// two are kept apart so an outage is never mistaken for missing history.
#[derive(Debug)]
pub enum StoreLookup {
    Found(BaselineStat),
    NotFound,
    TransportError(StorageError),
}

impl StoreLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Result<Option<BaselineStat>, StorageError>> for StoreLookup {
    fn from(result: Result<Option<BaselineStat>, StorageError>) -> Self {
        match result {
            Ok(Some(stat)) => Self::Found(stat),
            Ok(None) => Self::NotFound,
            Err(e) => Self::TransportError(e),
        }
    }
}

pub trait StatisticsStore: Send + Sync {
    /// Fetch the baseline stored under `key`.
    fn get(&self, key: &str) -> Result<Option<BaselineStat>, StorageError>;

    /// Write every record as one unit, overwriting existing keys wholesale.
    /// Returns the number of records written.
    fn put_batch(&self, records: &[BaselineStat]) -> Result<usize, StorageError>;

    /// `get` folded into a [`StoreLookup`].
    fn lookup(&self, key: &str) -> StoreLookup {
        self.get(key).into()
    }
}
