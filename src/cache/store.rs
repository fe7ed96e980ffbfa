//! Result Cache Module
//!
//! Memoization store for computed answers, keyed by [`CacheKey`] with
//! time-based expiry. There is no capacity bound: entries leave only by
//! expiring, lazily on lookup or through [`ResultCache::cleanup_expired`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::trace;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheKey, CacheStats, ClockSource, SystemClock};

// == Result Cache ==
/// Thread-safe TTL cache of operation answers.
#[derive(Debug)]
pub struct ResultCache {
    /// Key-value storage
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    /// Performance statistics
    stats: StatsCounters,
    /// Time source for expiry
    clock: Arc<dyn ClockSource>,
    /// TTL applied by the request handler
    default_ttl: Duration,
}

impl ResultCache {
    // == Constructor ==
    /// Creates a cache on the system clock.
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(default_ttl: Duration, clock: Arc<dyn ClockSource>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: StatsCounters::default(),
            clock,
            default_ttl,
        }
    }

    /// The process-wide TTL for stored answers.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Get ==
    /// Returns the stored answer if present and not expired.
    ///
    /// An expired entry counts as a miss and is removed.
    pub async fn get(&self, key: &CacheKey) -> Option<f64> {
        let now = self.clock.now_ms();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    self.stats.record_hit();
                    return Some(entry.value);
                }
                Some(_) => {}
                None => {
                    self.stats.record_miss();
                    return None;
                }
            }
        }

        self.stats.record_miss();

        // A concurrent put may have refreshed the entry since the read lock dropped.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
            self.stats.record_expired(1);
            trace!(key = %key, "removed expired entry on lookup");
        }
        None
    }

    // == Put ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Any existing entry for the key is replaced and its expiry reset.
    pub async fn put(&self, key: CacheKey, value: f64, ttl: Duration) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);
        self.entries.write().await.insert(key, entry);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.write().await;

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();

        self.stats.record_expired(removed);
        removed
    }

    // == Clear ==
    /// Drops every entry and resets statistics.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.stats.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.entries.read().await.len();
        self.stats.snapshot(total_entries)
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
