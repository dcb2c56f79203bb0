//! Counters for baseline lookup outcomes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of lookup outcomes for one scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupStats {
    pub found: u64,
    pub not_found: u64,
    pub transport_errors: u64,
    /// Lookups answered from the cache. Also counted as found or not found.
    pub cache_hits: u64,
}

impl LookupStats {
    pub fn total(&self) -> u64 {
        self.found + self.not_found + self.transport_errors
    }
}

#[derive(Debug, Default)]
pub(crate) struct LookupCounters {
    found: AtomicU64,
    not_found: AtomicU64,
    transport_errors: AtomicU64,
    cache_hits: AtomicU64,
}

impl LookupCounters {
    pub(crate) fn record_found(&self) {
        self.found.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> LookupStats {
        LookupStats {
            found: self.found.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }
}
