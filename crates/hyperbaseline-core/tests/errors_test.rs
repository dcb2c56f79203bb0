//! Error code mapping and display.

use hyperbaseline_core::errors::{
    ConfigError, HyperbaselineErrorCode, PipelineError, PipelineResult, ScoringError,
    StorageError,
};

#[test]
fn validation_errors_share_a_code() {
    let errors = [
        ConfigError::UnknownMethod { value: "X".into() },
        ConfigError::MissingOption { name: "value".into() },
        ConfigError::InvalidValue { field: "threshold".into(), message: "nope".into() },
    ];
    for e in &errors {
        assert_eq!(e.error_code(), "VALIDATION_ERROR");
    }
    let parse = ConfigError::ParseError { path: "p".into(), message: "m".into() };
    assert_eq!(parse.error_code(), "CONFIG_ERROR");
}

#[test]
fn coded_string_prefixes_code() {
    let e = ConfigError::UnknownMethod { value: "Tukey".into() };
    assert_eq!(e.coded_string(), "[VALIDATION_ERROR] Unrecognized outlier method value: Tukey");
}

#[test]
fn transport_errors_are_distinct_from_misses() {
    let miss = ScoringError::BaselineNotFound { key: "a#b#c".into() };
    let outage = ScoringError::StoreUnavailable { key: "a#b#c".into(), message: "down".into() };
    assert!(!miss.is_transport());
    assert!(outage.is_transport());
    assert_eq!(miss.error_code(), "DATA_UNAVAILABLE");
    assert_eq!(outage.error_code(), "STORE_UNAVAILABLE");
}

#[test]
fn pipeline_error_delegates_code() {
    let e: PipelineError = StorageError::MigrationFailed { version: 1, message: "x".into() }.into();
    assert_eq!(e.error_code(), "MIGRATION_FAILED");
    let e: PipelineError = ScoringError::NonNumericValue { field: "f".into(), value: "abc".into() }.into();
    assert_eq!(e.error_code(), "NON_NUMERIC_VALUE");
}

#[test]
fn pipeline_result_collects_non_fatal_errors() {
    let mut result: PipelineResult<Vec<u32>> = PipelineResult::new(vec![1, 2]);
    assert!(result.is_clean());
    result.add_error(ScoringError::BaselineNotFound { key: "k".into() }.into());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.data, vec![1, 2]);
}

#[test]
fn storage_errors_map_to_storage_codes() {
    let errors = [
        StorageError::SqliteError { message: "locked".into() },
        StorageError::Unavailable { message: "down".into() },
    ];
    for e in &errors {
        assert_eq!(e.error_code(), "STORAGE_ERROR");
    }
    let migration = StorageError::MigrationFailed { version: 1, message: "x".into() };
    assert_eq!(migration.error_code(), "MIGRATION_FAILED");
}
