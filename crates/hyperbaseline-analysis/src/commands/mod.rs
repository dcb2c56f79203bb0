//! The two record-level commands.

pub mod compare_to_baseline;
pub mod fill_baseline;
pub mod options;

pub use compare_to_baseline::CompareToBaselineCommand;
pub use fill_baseline::{baseline_record, FillBaselineCommand};
pub use options::{CompareToBaselineOptions, FillBaselineOptions};
