//! Stable error codes for callers outside Rust.

/// Every error enum implements this to expose a structured code string.
pub trait HyperbaselineErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const DATA_UNAVAILABLE: &str = "DATA_UNAVAILABLE";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const NON_NUMERIC_VALUE: &str = "NON_NUMERIC_VALUE";
