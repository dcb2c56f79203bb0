//! Shared constants.

/// Default collection baselines are written to and read from.
pub const DEFAULT_COLLECTION: &str = "hyperbaseline";

/// Default SQLite database file name, relative to the project root.
pub const DEFAULT_DB_FILE: &str = "hyperbaseline.db";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "hyperbaseline.toml";

/// Delimiter between the parts of a baseline key.
pub const KEY_DELIMITER: char = '#';

/// Suffix appended to a field name for its outlier score.
pub const SCORE_SUFFIX: &str = ":score";

/// Suffix appended to a field name for its `[lower, upper]` bounds.
pub const BOUNDS_SUFFIX: &str = ":bounds";

/// Suffix appended to a field name for the baseline it was scored against.
pub const STATS_SUFFIX: &str = ":stats";

/// Default read pool size for the SQLite store.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Default number of baseline lookups memoized per scorer.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
