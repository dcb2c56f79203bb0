//! Scoring values against stored baselines.

pub mod engine;
pub mod lookup_stats;

pub use engine::BaselineScorer;
pub use lookup_stats::LookupStats;
