//! Per (group, field) robust statistics.

use hyperbaseline_core::traits::{Clock, SystemClock};
use hyperbaseline_core::types::{BaselineKey, BaselineStat};

use super::grouping::ObservationGroups;
use crate::stats::{mad, mean, medcouple, median, percentile, pstdev};

/// Summary statistics of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineSummary {
    pub count: usize,
    pub min: f64,
    pub pct25: f64,
    pub mean: f64,
    pub median: f64,
    pub pct75: f64,
    pub max: f64,
    pub stdev: Option<f64>,
    pub mad: f64,
    pub medcouple: f64,
}

impl BaselineSummary {
    /// Summarize finite `values`. `None` for an empty series.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let min = *sorted.first()?;
        let max = *sorted.last()?;
        Some(Self {
            count: sorted.len(),
            min,
            pct25: percentile(&sorted, 25.0)?,
            mean: mean(&sorted)?,
            median: median(&sorted)?,
            pct75: percentile(&sorted, 75.0)?,
            max,
            stdev: pstdev(&sorted),
            mad: mad(&sorted)?,
            medcouple: medcouple(&sorted),
        })
    }
}

/// Turns grouped observations into [`BaselineStat`] records for one config.
pub struct BaselineAggregator<C: Clock = SystemClock> {
    config_name: String,
    owner: String,
    clock: C,
}

impl BaselineAggregator<SystemClock> {
    pub fn new(config_name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::with_clock(config_name, owner, SystemClock)
    }
}

impl<C: Clock> BaselineAggregator<C> {
    pub fn with_clock(config_name: impl Into<String>, owner: impl Into<String>, clock: C) -> Self {
        Self {
            config_name: config_name.into(),
            owner: owner.into(),
            clock,
        }
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Baseline for one series, stamped at `time`. `None` if no value is finite.
    pub fn compute(
        &self,
        group_key: &str,
        field: &str,
        values: &[f64],
        time: i64,
    ) -> Option<BaselineStat> {
        let summary = BaselineSummary::compute(values)?;
        let key = BaselineKey::new(&self.config_name, group_key, field);
        Some(BaselineStat {
            key: key.render(),
            config_name: self.config_name.clone(),
            group_key: group_key.to_string(),
            field: field.to_string(),
            min: summary.min,
            pct25: summary.pct25,
            mean: summary.mean,
            median: summary.median,
            pct75: summary.pct75,
            max: summary.max,
            stdev: summary.stdev,
            mad: summary.mad,
            medcouple: summary.medcouple,
            owner: self.owner.clone(),
            time,
        })
    }

    /// Lazily compute one baseline per non-empty series of `groups`.
    ///
    /// Every record of one call carries the same timestamp.
    pub fn baselines<'a>(
        &'a self,
        groups: &'a ObservationGroups,
    ) -> impl Iterator<Item = BaselineStat> + 'a {
        let time = self.clock.now_epoch_seconds();
        groups.iter().filter_map(move |(group_key, series)| {
            let stat = self.compute(group_key, &series.field, &series.values, time);
            if let Some(ref stat) = stat {
                tracing::trace!(key = %stat.key, count = series.values.len(), "baseline computed");
            }
            stat
        })
    }
}
