//! BaselineScorer: store lookup, bound computation, and scoring for one
//! config.
//!
//! Lookups are memoized in a bounded moka cache. Both a found baseline and a
//! cold-start miss are cached; a transport error is not, so the next lookup
//! for the same key goes back to the store.

use std::sync::Arc;

use hyperbaseline_core::config::ScoringConfig;
use hyperbaseline_core::constants::DEFAULT_CACHE_CAPACITY;
use hyperbaseline_core::errors::{ConfigError, ScoringError};
use hyperbaseline_core::tracing::metrics;
use hyperbaseline_core::traits::{StatisticsStore, StoreLookup};
use hyperbaseline_core::types::{BaselineKey, BaselineStat, OutlierMethod};
use moka::sync::Cache;

use super::lookup_stats::{LookupCounters, LookupStats};
use crate::outliers::{score, BoundStrategy, ScoreResult};
use crate::stats::parse_numeric;

/// Scores values of one config against its stored baselines.
pub struct BaselineScorer {
    store: Arc<dyn StatisticsStore>,
    config_name: String,
    method: OutlierMethod,
    threshold: Option<f64>,
    debug: bool,
    cache: Cache<String, Option<Arc<BaselineStat>>>,
    counters: LookupCounters,
}

impl BaselineScorer {
    pub fn new(
        store: Arc<dyn StatisticsStore>,
        config_name: impl Into<String>,
        method: OutlierMethod,
    ) -> Self {
        Self {
            store,
            config_name: config_name.into(),
            method,
            threshold: None,
            debug: false,
            cache: build_cache(DEFAULT_CACHE_CAPACITY),
            counters: LookupCounters::default(),
        }
    }

    /// Scorer configured from `[scoring]`.
    pub fn from_config(
        store: Arc<dyn StatisticsStore>,
        config_name: impl Into<String>,
        config: &ScoringConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(store, config_name, config.effective_method()?)
            .with_threshold(config.effective_threshold())
            .with_debug(config.effective_debug())
            .with_cache_capacity(config.effective_cache_capacity()))
    }

    /// `None` or `0` selects the method default.
    pub fn with_threshold(mut self, threshold: Option<f64>) -> Self {
        self.threshold = threshold.filter(|t| *t != 0.0);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache = build_cache(capacity);
        self
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    pub fn method(&self) -> OutlierMethod {
        self.method
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn lookup_stats(&self) -> LookupStats {
        self.counters.snapshot()
    }

    /// Baseline for (`group_key`, `field`) of this config.
    pub fn baseline(&self, group_key: &str, field: &str) -> Result<Arc<BaselineStat>, ScoringError> {
        let key = BaselineKey::new(&self.config_name, group_key, field).render();

        if let Some(cached) = self.cache.get(&key) {
            self.counters.record_cache_hit();
            return self.resolve(key, cached);
        }

        match self.store.lookup(&key) {
            StoreLookup::Found(stat) => {
                let stat = Arc::new(stat);
                self.cache.insert(key.clone(), Some(Arc::clone(&stat)));
                self.resolve(key, Some(stat))
            }
            StoreLookup::NotFound => {
                self.cache.insert(key.clone(), None);
                self.resolve(key, None)
            }
            StoreLookup::TransportError(e) => {
                self.counters.record_transport_error();
                tracing::warn!(
                    key = %key,
                    outcome = metrics::OUTCOME_TRANSPORT_ERROR,
                    error = %e,
                    "baseline lookup failed"
                );
                Err(ScoringError::StoreUnavailable {
                    key,
                    message: e.to_string(),
                })
            }
        }
    }

    /// Score a numeric value.
    pub fn score(&self, group_key: &str, field: &str, value: f64) -> Result<ScoreResult, ScoringError> {
        let stat = self.baseline(group_key, field)?;
        let bounds = self.method.compute_bounds(&stat, self.threshold)?;
        let result = score(value, &bounds);
        if self.debug {
            Ok(result.with_diagnostics(bounds, (*stat).clone()))
        } else {
            Ok(result)
        }
    }

    /// Score a raw record value. Non-numeric input fails this field only.
    pub fn score_raw(&self, group_key: &str, field: &str, raw: &str) -> Result<ScoreResult, ScoringError> {
        let value = parse_numeric(raw).ok_or_else(|| ScoringError::NonNumericValue {
            field: field.to_string(),
            value: raw.to_string(),
        })?;
        self.score(group_key, field, value)
    }

    fn resolve(
        &self,
        key: String,
        cached: Option<Arc<BaselineStat>>,
    ) -> Result<Arc<BaselineStat>, ScoringError> {
        match cached {
            Some(stat) => {
                self.counters.record_found();
                tracing::trace!(key = %key, outcome = metrics::OUTCOME_FOUND, "baseline lookup");
                Ok(stat)
            }
            None => {
                self.counters.record_not_found();
                tracing::debug!(key = %key, outcome = metrics::OUTCOME_NOT_FOUND, "baseline lookup");
                Err(ScoringError::BaselineNotFound { key })
            }
        }
    }
}

fn build_cache(capacity: u64) -> Cache<String, Option<Arc<BaselineStat>>> {
    Cache::builder().max_capacity(capacity).build()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use hyperbaseline_core::errors::StorageError;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::outliers::{Bounds, Score};

    /// Map-backed store that counts `get` calls and can be switched offline.
    #[derive(Default)]
    struct TestStore {
        records: Mutex<FxHashMap<String, BaselineStat>>,
        gets: AtomicUsize,
        offline: Mutex<bool>,
    }

    impl TestStore {
        fn with(stats: Vec<BaselineStat>) -> Arc<Self> {
            let store = Self::default();
            store.put_batch(&stats).unwrap();
            Arc::new(store)
        }

        fn set_offline(&self, offline: bool) {
            *self.offline.lock().unwrap() = offline;
        }
    }

    impl StatisticsStore for TestStore {
        fn get(&self, key: &str) -> Result<Option<BaselineStat>, StorageError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            if *self.offline.lock().unwrap() {
                return Err(StorageError::Unavailable {
                    message: "connection refused".to_string(),
                });
            }
            Ok(self.records.lock().unwrap().get(key).cloned())
        }

        fn put_batch(&self, records: &[BaselineStat]) -> Result<usize, StorageError> {
            let mut map = self.records.lock().unwrap();
            for r in records {
                map.insert(r.key.clone(), r.clone());
            }
            Ok(records.len())
        }
    }

    fn stat(group: &str, field: &str) -> BaselineStat {
        BaselineStat {
            key: format!("cfg#{group}#{field}"),
            config_name: "cfg".to_string(),
            group_key: group.to_string(),
            field: field.to_string(),
            min: 5.0,
            pct25: 7.0,
            mean: 9.0,
            median: 9.0,
            pct75: 11.0,
            max: 13.0,
            stdev: Some(8.0f64.sqrt()),
            mad: 2.0,
            medcouple: 0.0,
            owner: "admin".to_string(),
            time: 0,
        }
    }

    #[test]
    fn scores_against_hampel_by_default() {
        let store = TestStore::with(vec![stat("alice", "count")]);
        let scorer = BaselineScorer::new(store, "cfg", OutlierMethod::default());
        assert_eq!(scorer.score("alice", "count", 9.0).unwrap().score, Score::Inlier);
        assert_eq!(scorer.score("alice", "count", 20.0).unwrap().score, Score::Outlier);
        assert_eq!(scorer.score("alice", "count", 15.0).unwrap().score, Score::Inlier);
    }

    #[test]
    fn debug_attaches_bounds_and_baseline() {
        let store = TestStore::with(vec![stat("alice", "count")]);
        let scorer = BaselineScorer::new(store, "cfg", OutlierMethod::Hampel).with_debug(true);
        let result = scorer.score("alice", "count", 9.0).unwrap();
        let diagnostics = result.diagnostics.unwrap();
        assert_eq!(diagnostics.bounds, Bounds::new(3.0, 15.0));
        assert_eq!(diagnostics.baseline.key, "cfg#alice#count");
    }

    #[test]
    fn miss_is_cached() {
        let store = TestStore::with(vec![]);
        let scorer = BaselineScorer::new(store.clone(), "cfg", OutlierMethod::Hampel);
        for _ in 0..3 {
            let err = scorer.score("bob", "count", 1.0).unwrap_err();
            assert!(matches!(err, ScoringError::BaselineNotFound { .. }));
        }
        assert_eq!(store.gets.load(Ordering::SeqCst), 1);
        let stats = scorer.lookup_stats();
        assert_eq!(stats.not_found, 3);
        assert_eq!(stats.cache_hits, 2);
        assert_eq!(stats.transport_errors, 0);
    }

    #[test]
    fn transport_errors_are_not_cached() {
        let store = TestStore::with(vec![stat("alice", "count")]);
        let scorer = BaselineScorer::new(store.clone(), "cfg", OutlierMethod::Hampel);

        store.set_offline(true);
        let err = scorer.score("alice", "count", 9.0).unwrap_err();
        assert!(err.is_transport());

        store.set_offline(false);
        assert!(scorer.score("alice", "count", 9.0).is_ok());
        assert_eq!(store.gets.load(Ordering::SeqCst), 2);

        let stats = scorer.lookup_stats();
        assert_eq!(stats.transport_errors, 1);
        assert_eq!(stats.found, 1);
        assert_eq!(stats.not_found, 0);
    }

    #[test]
    fn non_numeric_raw_value_fails_the_field() {
        let store = TestStore::with(vec![stat("alice", "count")]);
        let scorer = BaselineScorer::new(store, "cfg", OutlierMethod::Hampel);
        let err = scorer.score_raw("alice", "count", "n/a").unwrap_err();
        assert!(matches!(err, ScoringError::NonNumericValue { .. }));
        assert!(scorer.score_raw("alice", "count", " 9 ").is_ok());
    }

    #[test]
    fn esd_on_single_value_baseline_is_unavailable() {
        let mut s = stat("alice", "count");
        s.stdev = None;
        let scorer = BaselineScorer::new(TestStore::with(vec![s]), "cfg", OutlierMethod::Esd);
        let err = scorer.score("alice", "count", 9.0).unwrap_err();
        assert!(matches!(err, ScoringError::MissingStatistic { .. }));
    }

    #[test]
    fn from_config_rejects_unknown_method() {
        let config = ScoringConfig {
            method: Some("zscore".to_string()),
            ..ScoringConfig::default()
        };
        let result = BaselineScorer::from_config(TestStore::with(vec![]), "cfg", &config);
        assert!(matches!(result, Err(ConfigError::UnknownMethod { .. })));
    }

    #[test]
    fn from_config_applies_threshold() {
        let config = ScoringConfig {
            method: Some("Hampel".to_string()),
            threshold: Some(1.0),
            ..ScoringConfig::default()
        };
        let store = TestStore::with(vec![stat("alice", "count")]);
        let scorer = BaselineScorer::from_config(store, "cfg", &config).unwrap();
        assert_eq!(scorer.threshold(), Some(1.0));
        assert_eq!(scorer.score("alice", "count", 12.0).unwrap().score, Score::Outlier);
    }
}
