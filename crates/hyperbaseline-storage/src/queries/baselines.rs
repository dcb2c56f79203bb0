//! Baseline upsert, lookup, and listing queries.

use hyperbaseline_core::errors::StorageError;
use hyperbaseline_core::types::BaselineStat;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "key, config_name, group_key, field, min, pct25, mean, median, \
                              pct75, max, stdev, mad, medcouple, owner, computed_at";

/// Insert a baseline, replacing every column of an existing row.
pub fn upsert_baseline(
    conn: &Connection,
    collection: &str,
    stat: &BaselineStat,
) -> Result<(), StorageError> {
    conn.prepare_cached(
        "INSERT INTO baselines (collection, key, config_name, group_key, field, min, pct25, mean, median, pct75, max, stdev, mad, medcouple, owner, computed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
         ON CONFLICT(collection, key) DO UPDATE SET
           config_name = excluded.config_name,
           group_key = excluded.group_key,
           field = excluded.field,
           min = excluded.min,
           pct25 = excluded.pct25,
           mean = excluded.mean,
           median = excluded.median,
           pct75 = excluded.pct75,
           max = excluded.max,
           stdev = excluded.stdev,
           mad = excluded.mad,
           medcouple = excluded.medcouple,
           owner = excluded.owner,
           computed_at = excluded.computed_at",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            collection,
            stat.key,
            stat.config_name,
            stat.group_key,
            stat.field,
            stat.min,
            stat.pct25,
            stat.mean,
            stat.median,
            stat.pct75,
            stat.max,
            stat.stdev,
            stat.mad,
            stat.medcouple,
            stat.owner,
            stat.time,
        ])
    })
    .map_err(|e| StorageError::SqliteError {
        message: format!("upsert baseline {}: {e}", stat.key),
    })?;
    Ok(())
}

/// Fetch one baseline by key.
pub fn get_baseline(
    conn: &Connection,
    collection: &str,
    key: &str,
) -> Result<Option<BaselineStat>, StorageError> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM baselines WHERE collection = ?1 AND key = ?2");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    stmt.query_row(params![collection, key], map_baseline_row)
        .optional()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// All baselines written under one config name, ordered by key.
pub fn list_by_config(
    conn: &Connection,
    collection: &str,
    config_name: &str,
) -> Result<Vec<BaselineStat>, StorageError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM baselines WHERE collection = ?1 AND config_name = ?2 ORDER BY key ASC"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    let rows = stmt
        .query_map(params![collection, config_name], map_baseline_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Delete every baseline of a config. Returns the number of rows removed.
pub fn delete_config(
    conn: &Connection,
    collection: &str,
    config_name: &str,
) -> Result<usize, StorageError> {
    conn.execute(
        "DELETE FROM baselines WHERE collection = ?1 AND config_name = ?2",
        params![collection, config_name],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Number of baselines in a collection.
pub fn count(conn: &Connection, collection: &str) -> Result<usize, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM baselines WHERE collection = ?1",
        params![collection],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

fn map_baseline_row(row: &Row<'_>) -> rusqlite::Result<BaselineStat> {
    Ok(BaselineStat {
        key: row.get(0)?,
        config_name: row.get(1)?,
        group_key: row.get(2)?,
        field: row.get(3)?,
        min: row.get(4)?,
        pct25: row.get(5)?,
        mean: row.get(6)?,
        median: row.get(7)?,
        pct75: row.get(8)?,
        max: row.get(9)?,
        stdev: row.get(10)?,
        mad: row.get(11)?,
        medcouple: row.get(12)?,
        owner: row.get(13)?,
        time: row.get(14)?,
    })
}
