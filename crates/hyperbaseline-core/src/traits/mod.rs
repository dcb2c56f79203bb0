//! Seams between the statistics engine and its collaborators.

pub mod clock;
pub mod statistics_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use statistics_store::{StatisticsStore, StoreLookup};
