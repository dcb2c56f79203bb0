//! Per-field scoring failures.
//!
//! None of these abort a run. The affected field is left unscored and the
//! remaining fields and records are processed.

use super::error_code::{self, HyperbaselineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("No baseline stored for {key}")]
    BaselineNotFound { key: String },

    #[error("Baseline {key} has no {statistic}")]
    MissingStatistic { key: String, statistic: &'static str },

    #[error("Store lookup failed for {key}: {message}")]
    StoreUnavailable { key: String, message: String },

    #[error("Field {field} is not numeric: {value:?}")]
    NonNumericValue { field: String, value: String },
}

impl ScoringError {
    /// True for failures of the store transport, as opposed to a cold-start
    /// miss or a data problem.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}

impl HyperbaselineErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BaselineNotFound { .. } | Self::MissingStatistic { .. } => {
                error_code::DATA_UNAVAILABLE
            }
            Self::StoreUnavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::NonNumericValue { .. } => error_code::NON_NUMERIC_VALUE,
        }
    }
}
