//! Outcome labels attached to scoring events.
//!
//! Log queries rely on these values to tell a cold-start miss from a store
//! outage.

/// The baseline was found.
pub const OUTCOME_FOUND: &str = "found";

/// No baseline is stored for the key (cold start).
pub const OUTCOME_NOT_FOUND: &str = "not_found";

/// The store could not be reached.
pub const OUTCOME_TRANSPORT_ERROR: &str = "transport_error";
