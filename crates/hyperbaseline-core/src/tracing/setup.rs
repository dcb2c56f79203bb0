//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "HYPERBASELINE_LOG";

/// Filter used when `HYPERBASELINE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "hyperbaseline_core=info,hyperbaseline_analysis=info,hyperbaseline_storage=info";

/// Initialize the tracing/logging system.
///
/// Reads `HYPERBASELINE_LOG` for per-module log levels, e.g.
/// `HYPERBASELINE_LOG=hyperbaseline_analysis=debug,hyperbaseline_storage=warn`.
///
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
