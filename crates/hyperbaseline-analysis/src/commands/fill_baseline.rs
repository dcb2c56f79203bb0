//! `fill_baseline`: records in, baselines out, one batch write.

use std::sync::Arc;
use std::time::Instant;

use hyperbaseline_core::config::{HyperbaselineConfig, RunIdentity};
use hyperbaseline_core::errors::PipelineError;
use hyperbaseline_core::traits::{Clock, StatisticsStore, SystemClock};
use hyperbaseline_core::types::{BaselineStat, Record};

use super::options::FillBaselineOptions;
use crate::baseline::{BaselineAggregator, ObservationGroups};

/// Computes baselines from a batch of records and persists them.
pub struct FillBaselineCommand<C: Clock = SystemClock> {
    options: FillBaselineOptions,
    aggregator: BaselineAggregator<C>,
    store: Arc<dyn StatisticsStore>,
}

impl FillBaselineCommand<SystemClock> {
    pub fn new(
        options: FillBaselineOptions,
        owner: impl Into<String>,
        store: Arc<dyn StatisticsStore>,
    ) -> Self {
        Self::with_clock(options, owner, store, SystemClock)
    }

    /// Owner resolved from `[aggregation]` and the run identity.
    pub fn from_config(
        options: FillBaselineOptions,
        config: &HyperbaselineConfig,
        identity: &RunIdentity,
        store: Arc<dyn StatisticsStore>,
    ) -> Result<Self, PipelineError> {
        let owner = config.aggregation.resolve_owner(identity)?;
        Ok(Self::new(options, owner, store))
    }
}

impl<C: Clock> FillBaselineCommand<C> {
    pub fn with_clock(
        options: FillBaselineOptions,
        owner: impl Into<String>,
        store: Arc<dyn StatisticsStore>,
        clock: C,
    ) -> Self {
        let aggregator = BaselineAggregator::with_clock(options.config_name.clone(), owner, clock);
        Self {
            options,
            aggregator,
            store,
        }
    }

    pub fn options(&self) -> &FillBaselineOptions {
        &self.options
    }

    /// Group `records` by the `value` field.
    pub fn group<'r, I>(&self, records: I) -> ObservationGroups
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let mut groups = ObservationGroups::with_fields(self.options.fieldnames.iter().cloned());
        let mut skipped = 0usize;
        for record in records {
            if !groups.ingest_record(record, &self.options.value) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, group_by = %self.options.value, "records without group-by field");
        }
        groups
    }

    /// Compute every baseline and write them in one batch.
    ///
    /// No write is issued when nothing was produced. A failed write fails the
    /// run and nothing is retried.
    pub fn run<'r, I>(&self, records: I) -> Result<Vec<BaselineStat>, PipelineError>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let start = Instant::now();
        let groups = self.group(records);
        let baselines: Vec<BaselineStat> = self.aggregator.baselines(&groups).collect();

        if baselines.is_empty() {
            tracing::info!(
                config = %self.options.config_name,
                groups = groups.group_count(),
                "no baselines produced, skipping write"
            );
            return Ok(baselines);
        }

        let written = self.store.put_batch(&baselines).map_err(|e| {
            tracing::error!(
                config = %self.options.config_name,
                records = baselines.len(),
                error = %e,
                "baseline batch write failed"
            );
            PipelineError::from(e)
        })?;

        tracing::info!(
            config = %self.options.config_name,
            groups = groups.group_count(),
            records = written,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "baselines written"
        );
        Ok(baselines)
    }

    /// Like [`run`](Self::run), with each baseline rendered as an output record.
    pub fn run_records<'r, I>(&self, records: I) -> Result<Vec<Record>, PipelineError>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        Ok(self.run(records)?.iter().map(baseline_record).collect())
    }
}

/// A baseline as an output record, fields in storage order. A missing stdev
/// renders as an empty value.
pub fn baseline_record(stat: &BaselineStat) -> Record {
    let mut record = Record::with_capacity(15);
    record.push("_key", stat.key.as_str());
    record.push("config_name", stat.config_name.as_str());
    record.push("value", stat.group_key.as_str());
    record.push("field", stat.field.as_str());
    record.push("min", stat.min.to_string());
    record.push("pct25", stat.pct25.to_string());
    record.push("mean", stat.mean.to_string());
    record.push("median", stat.median.to_string());
    record.push("pct75", stat.pct75.to_string());
    record.push("max", stat.max.to_string());
    record.push("stdev", stat.stdev.map(|s| s.to_string()).unwrap_or_default());
    record.push("mad", stat.mad.to_string());
    record.push("medcouple", stat.medcouple.to_string());
    record.push("owner", stat.owner.as_str());
    record.push("_time", stat.time.to_string());
    record
}

#[cfg(test)]
mod tests {
    use hyperbaseline_core::errors::StorageError;
    use hyperbaseline_core::traits::FixedClock;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingStore {
        batches: Mutex<Vec<usize>>,
        fail: bool,
    }

    impl StatisticsStore for RecordingStore {
        fn get(&self, _key: &str) -> Result<Option<BaselineStat>, StorageError> {
            Ok(None)
        }

        fn put_batch(&self, records: &[BaselineStat]) -> Result<usize, StorageError> {
            if self.fail {
                return Err(StorageError::Unavailable {
                    message: "kv store down".to_string(),
                });
            }
            self.batches.lock().unwrap().push(records.len());
            Ok(records.len())
        }
    }

    fn records() -> Vec<Record> {
        vec![
            [("_time", "1"), ("user", "alice"), ("count", "5")].into_iter().collect(),
            [("_time", "2"), ("user", "alice"), ("count", "7")].into_iter().collect(),
            [("_time", "3"), ("user", "bob"), ("count", "oops")].into_iter().collect(),
            [("_time", "4"), ("count", "1")].into_iter().collect(),
        ]
    }

    fn command(store: Arc<RecordingStore>) -> FillBaselineCommand<FixedClock> {
        FillBaselineCommand::with_clock(
            FillBaselineOptions::new("ui_usage", "user"),
            "admin",
            store,
            FixedClock(42),
        )
    }

    #[test]
    fn writes_one_batch() {
        let store = Arc::new(RecordingStore::default());
        let out = command(store.clone()).run(&records()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key, "ui_usage#alice#count");
        assert_eq!(out[0].mean, 6.0);
        assert_eq!(out[0].time, 42);
        assert_eq!(*store.batches.lock().unwrap(), vec![1]);
    }

    #[test]
    fn empty_run_skips_write() {
        let store = Arc::new(RecordingStore::default());
        let out = command(store.clone()).run(&Vec::<Record>::new()).unwrap();
        assert!(out.is_empty());
        assert!(store.batches.lock().unwrap().is_empty());
    }

    #[test]
    fn write_failure_fails_the_run() {
        let store = Arc::new(RecordingStore {
            fail: true,
            ..RecordingStore::default()
        });
        let err = command(store).run(&records()).unwrap_err();
        assert!(matches!(err, PipelineError::Storage(StorageError::Unavailable { .. })));
    }

    #[test]
    fn output_records_follow_storage_order() {
        let store = Arc::new(RecordingStore::default());
        let out = command(store).run_records(&records()).unwrap();
        let names: Vec<&str> = out[0].field_names().collect();
        assert_eq!(
            names,
            vec![
                "_key", "config_name", "value", "field", "min", "pct25", "mean", "median",
                "pct75", "max", "stdev", "mad", "medcouple", "owner", "_time"
            ]
        );
        assert_eq!(out[0].get("stdev"), Some("1"));
        assert_eq!(out[0].get("_time"), Some("42"));
    }
}
