//! `compare_to_baseline`: scores record fields against stored baselines.
//!
//! Each scored field `f` is followed in the output by `f:score` (`0`, `1`,
//! or empty when unscored) and, with debug on, `f:bounds` and `f:stats`.
//! Any failure affects only the field it happened on.

use std::sync::Arc;

use hyperbaseline_core::config::ScoringConfig;
use hyperbaseline_core::constants::{BOUNDS_SUFFIX, SCORE_SUFFIX, STATS_SUFFIX};
use hyperbaseline_core::errors::{ConfigError, PipelineError, PipelineResult, ScoringError};
use hyperbaseline_core::traits::StatisticsStore;
use hyperbaseline_core::types::Record;
use rayon::prelude::*;

use super::options::CompareToBaselineOptions;
use crate::scoring::BaselineScorer;

pub struct CompareToBaselineCommand {
    options: CompareToBaselineOptions,
    scorer: BaselineScorer,
    parallel: bool,
}

impl CompareToBaselineCommand {
    /// Command options win over `[scoring]` values.
    pub fn new(
        options: CompareToBaselineOptions,
        scoring: &ScoringConfig,
        store: Arc<dyn StatisticsStore>,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let method = match options.method {
            Some(method) => method,
            None => scoring.effective_method()?,
        };
        // An explicit 0 defers to `[scoring]`, like an absent option.
        let threshold = options
            .threshold
            .filter(|t| *t != 0.0)
            .or(scoring.effective_threshold());
        let debug = options.debug.unwrap_or(scoring.effective_debug());

        let scorer = BaselineScorer::new(store, options.config_name.clone(), method)
            .with_threshold(threshold)
            .with_debug(debug)
            .with_cache_capacity(scoring.effective_cache_capacity());

        Ok(Self {
            options,
            scorer,
            parallel: scoring.effective_parallel(),
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn options(&self) -> &CompareToBaselineOptions {
        &self.options
    }

    pub fn scorer(&self) -> &BaselineScorer {
        &self.scorer
    }

    /// Score every record. Output order matches input order; per-field
    /// failures are collected, not raised.
    pub fn run(&self, records: &[Record]) -> PipelineResult<Vec<Record>> {
        let scored: Vec<(Record, Vec<ScoringError>)> = if self.parallel {
            records.par_iter().map(|r| self.process(r)).collect()
        } else {
            records.iter().map(|r| self.process(r)).collect()
        };

        let mut result = PipelineResult::new(Vec::with_capacity(scored.len()));
        for (record, errors) in scored {
            result.data.push(record);
            for e in errors {
                result.add_error(PipelineError::from(e));
            }
        }

        let lookups = self.scorer.lookup_stats();
        tracing::info!(
            config = %self.options.config_name,
            records = result.data.len(),
            errors = result.error_count(),
            found = lookups.found,
            not_found = lookups.not_found,
            transport_errors = lookups.transport_errors,
            "records compared to baseline"
        );
        result
    }

    /// Score one record.
    pub fn process(&self, record: &Record) -> (Record, Vec<ScoringError>) {
        let group_key = record.get(&self.options.value);
        if group_key.is_none() {
            tracing::debug!(group_by = %self.options.value, "record without group-by field left unscored");
        }

        let mut out = Record::with_capacity(record.len() + self.options.fieldnames.len());
        let mut errors = Vec::new();

        for (name, raw) in record.iter() {
            out.push(name, raw);
            if !self.options.fieldnames.iter().any(|f| f == name) {
                continue;
            }
            let score_field = format!("{name}{SCORE_SUFFIX}");
            let Some(group_key) = group_key else {
                out.push(score_field, "");
                continue;
            };

            match self.scorer.score_raw(group_key, name, raw) {
                Ok(result) => {
                    out.push(score_field, result.score.to_string());
                    if let Some(diagnostics) = result.diagnostics {
                        out.push(format!("{name}{BOUNDS_SUFFIX}"), diagnostics.bounds.to_string());
                        let stats = diagnostics.baseline.to_json().unwrap_or_else(|e| {
                            tracing::warn!(key = %diagnostics.baseline.key, error = %e, "baseline not serializable");
                            String::new()
                        });
                        out.push(format!("{name}{STATS_SUFFIX}"), stats);
                    }
                }
                Err(e) => {
                    out.push(score_field, "");
                    errors.push(e);
                }
            }
        }
        (out, errors)
    }
}

#[cfg(test)]
mod tests {
    use hyperbaseline_core::errors::StorageError;
    use hyperbaseline_core::types::BaselineStat;

    use super::*;

    struct OneBaseline(BaselineStat);

    impl StatisticsStore for OneBaseline {
        fn get(&self, key: &str) -> Result<Option<BaselineStat>, StorageError> {
            Ok((key == self.0.key).then(|| self.0.clone()))
        }

        fn put_batch(&self, records: &[BaselineStat]) -> Result<usize, StorageError> {
            Ok(records.len())
        }
    }

    fn store() -> Arc<dyn StatisticsStore> {
        Arc::new(OneBaseline(BaselineStat {
            key: "ui#alice#hour".to_string(),
            config_name: "ui".to_string(),
            group_key: "alice".to_string(),
            field: "hour".to_string(),
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
        }))
    }

    fn record(user: &str, hour: &str) -> Record {
        [("user", user), ("hour", hour), ("note", "x")].into_iter().collect()
    }

    fn command(debug: bool) -> CompareToBaselineCommand {
        let mut options = CompareToBaselineOptions::new("ui", "user", ["hour"]);
        options.debug = Some(debug);
        CompareToBaselineCommand::new(options, &ScoringConfig::default(), store()).unwrap()
    }

    #[test]
    fn score_follows_its_field() {
        let (out, errors) = command(false).process(&record("alice", "20"));
        let names: Vec<&str> = out.field_names().collect();
        assert_eq!(names, vec!["user", "hour", "hour:score", "note"]);
        assert_eq!(out.get("hour:score"), Some("1"));
        assert!(errors.is_empty());
    }

    #[test]
    fn debug_adds_bounds_and_stats() {
        let (out, _) = command(true).process(&record("alice", "9"));
        let names: Vec<&str> = out.field_names().collect();
        assert_eq!(
            names,
            vec!["user", "hour", "hour:score", "hour:bounds", "hour:stats", "note"]
        );
        assert_eq!(out.get("hour:score"), Some("0"));
        assert_eq!(out.get("hour:bounds"), Some("[3.0, 15.0]"));
        let stats = BaselineStat::from_json(out.get("hour:stats").unwrap()).unwrap();
        assert_eq!(stats.key, "ui#alice#hour");
    }

    #[test]
    fn cold_start_leaves_field_blank() {
        let (out, errors) = command(false).process(&record("carol", "9"));
        assert_eq!(out.get("hour:score"), Some(""));
        assert!(matches!(errors.as_slice(), [ScoringError::BaselineNotFound { .. }]));
    }

    #[test]
    fn non_numeric_value_fails_only_that_field() {
        let result = command(false).run(&[record("alice", "late"), record("alice", "10")]);
        assert_eq!(result.data[0].get("hour:score"), Some(""));
        assert_eq!(result.data[1].get("hour:score"), Some("0"));
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn missing_group_field_is_unscored() {
        let rec: Record = [("hour", "9")].into_iter().collect();
        let (out, errors) = command(false).process(&rec);
        assert_eq!(out.get("hour:score"), Some(""));
        assert!(errors.is_empty());
    }

    #[test]
    fn zero_threshold_option_defers_to_config() {
        let scoring = ScoringConfig {
            threshold: Some(2.0),
            ..ScoringConfig::default()
        };
        let mut options = CompareToBaselineOptions::new("ui", "user", ["hour"]);
        options.threshold = Some(0.0);
        options.debug = Some(true);
        let cmd = CompareToBaselineCommand::new(options, &scoring, store()).unwrap();
        assert_eq!(cmd.scorer().threshold(), Some(2.0));

        // Hampel with t = 2: 9 ± 2·2
        let (out, _) = cmd.process(&record("alice", "14"));
        assert_eq!(out.get("hour:bounds"), Some("[5.0, 13.0]"));
        assert_eq!(out.get("hour:score"), Some("1"));
    }

    #[test]
    fn explicit_threshold_option_wins() {
        let scoring = ScoringConfig {
            threshold: Some(2.0),
            ..ScoringConfig::default()
        };
        let mut options = CompareToBaselineOptions::new("ui", "user", ["hour"]);
        options.threshold = Some(4.0);
        let cmd = CompareToBaselineCommand::new(options, &scoring, store()).unwrap();
        assert_eq!(cmd.scorer().threshold(), Some(4.0));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let records: Vec<Record> = (0..200)
            .map(|i| record(if i % 3 == 0 { "bob" } else { "alice" }, &i.to_string()))
            .collect();
        let parallel = command(false).with_parallel(true).run(&records);
        let sequential = command(false).with_parallel(false).run(&records);
        assert_eq!(parallel.data, sequential.data);
        assert_eq!(parallel.error_count(), sequential.error_count());
    }
}
