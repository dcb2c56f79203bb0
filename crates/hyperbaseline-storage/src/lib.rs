//! Persistence for baseline records.
//!
//! [`SqliteStatisticsStore`] is the durable store: one serialized writer, a
//! pool of read-only connections, `PRAGMA user_version` migrations.
//! [`MemoryStatisticsStore`] keeps everything in a map.

pub mod connection;
pub mod memory;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use memory::MemoryStatisticsStore;
pub use store::SqliteStatisticsStore;
