//! V001: Initial schema, the baselines table.

pub const MIGRATION_SQL: &str = r#"
-- One row per (collection, key). A recomputed baseline replaces the row.
-- stdev is NULL when the baseline was built from a single value.
CREATE TABLE IF NOT EXISTS baselines (
    collection TEXT NOT NULL,
    key TEXT NOT NULL,
    config_name TEXT NOT NULL,
    group_key TEXT NOT NULL,
    field TEXT NOT NULL,
    min REAL NOT NULL,
    pct25 REAL NOT NULL,
    mean REAL NOT NULL,
    median REAL NOT NULL,
    pct75 REAL NOT NULL,
    max REAL NOT NULL,
    stdev REAL,
    mad REAL NOT NULL,
    medcouple REAL NOT NULL,
    owner TEXT NOT NULL,
    computed_at INTEGER NOT NULL,
    PRIMARY KEY (collection, key)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_baselines_config
    ON baselines(collection, config_name);
"#;
