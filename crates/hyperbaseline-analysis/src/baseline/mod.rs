//! Baseline aggregation: grouping observations and summarizing each series.

pub mod aggregator;
pub mod grouping;

pub use aggregator::{BaselineAggregator, BaselineSummary};
pub use grouping::{FieldSeries, ObservationGroups};
