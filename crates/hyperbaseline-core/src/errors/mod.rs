//! Error handling for hyperbaseline.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod scoring_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::HyperbaselineErrorCode;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use scoring_error::ScoringError;
pub use storage_error::StorageError;
