//! Configuration and option validation errors.

use super::error_code::{self, HyperbaselineErrorCode};

/// Errors raised while loading config or validating command options.
/// All of them are fatal and happen before any record is processed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unrecognized outlier method value: {value}")]
    UnknownMethod { value: String },

    #[error("Missing required option: {name}")]
    MissingOption { name: String },
}

impl HyperbaselineErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } | Self::ParseError { .. } => error_code::CONFIG_ERROR,
            Self::ValidationFailed { .. }
            | Self::InvalidValue { .. }
            | Self::UnknownMethod { .. }
            | Self::MissingOption { .. } => error_code::VALIDATION_ERROR,
        }
    }
}
