//! Core types, traits, errors, config, tracing, and constants for hyperbaseline.
//!
//! Every other crate in the workspace depends on this one. It has no
//! knowledge of SQLite or of the statistics themselves.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
