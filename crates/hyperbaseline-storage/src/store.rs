//! SQLite-backed [`StatisticsStore`].

use std::path::Path;
use std::time::Instant;

use hyperbaseline_core::config::StoreConfig;
use hyperbaseline_core::errors::StorageError;
use hyperbaseline_core::traits::StatisticsStore;
use hyperbaseline_core::types::BaselineStat;

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::baselines;

/// Baselines of one collection in a SQLite database.
pub struct SqliteStatisticsStore {
    db: DatabaseManager,
    collection: String,
}

impl SqliteStatisticsStore {
    pub fn new(db: DatabaseManager, collection: impl Into<String>) -> Self {
        Self {
            db,
            collection: collection.into(),
        }
    }

    /// Open the database named by `config`, resolving a relative path
    /// against `root`.
    pub fn open(root: &Path, config: &StoreConfig) -> Result<Self, StorageError> {
        let path = root.join(config.effective_path());
        let db = DatabaseManager::open(&path, config.effective_read_pool_size())?;
        Ok(Self::new(db, config.effective_collection()))
    }

    pub fn open_in_memory(collection: impl Into<String>) -> Result<Self, StorageError> {
        Ok(Self::new(DatabaseManager::open_in_memory()?, collection))
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Every baseline stored for `config_name`, ordered by key.
    pub fn list_config(&self, config_name: &str) -> Result<Vec<BaselineStat>, StorageError> {
        self.db
            .with_reader(|conn| baselines::list_by_config(conn, &self.collection, config_name))
    }

    /// Remove every baseline stored for `config_name`.
    pub fn delete_config(&self, config_name: &str) -> Result<usize, StorageError> {
        self.db
            .with_writer(|conn| baselines::delete_config(conn, &self.collection, config_name))
    }

    pub fn count(&self) -> Result<usize, StorageError> {
        self.db.with_reader(|conn| baselines::count(conn, &self.collection))
    }
}

impl StatisticsStore for SqliteStatisticsStore {
    fn get(&self, key: &str) -> Result<Option<BaselineStat>, StorageError> {
        self.db
            .with_reader(|conn| baselines::get_baseline(conn, &self.collection, key))
    }

    fn put_batch(&self, records: &[BaselineStat]) -> Result<usize, StorageError> {
        if records.is_empty() {
            return Ok(0);
        }
        let start = Instant::now();
        let written = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                for stat in records {
                    baselines::upsert_baseline(tx, &self.collection, stat)?;
                }
                Ok(records.len())
            })
        })?;
        tracing::debug!(
            collection = %self.collection,
            records = written,
            batch_write_time_ms = start.elapsed().as_millis() as u64,
            "baseline batch committed"
        );
        Ok(written)
    }
}
