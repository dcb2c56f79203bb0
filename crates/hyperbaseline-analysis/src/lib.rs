//! Statistics engine for hyperbaseline.
//!
//! - [`stats`]: weighted median, medcouple, descriptive statistics.
//! - [`baseline`]: grouping observations and computing baselines.
//! - [`outliers`]: the four bound strategies and the binary scorer.
//! - [`scoring`]: store lookups with caching, bound computation, scoring.
//! - [`commands`]: `fill_baseline` and `compare_to_baseline` over records.

pub mod baseline;
pub mod commands;
pub mod outliers;
pub mod scoring;
pub mod stats;
