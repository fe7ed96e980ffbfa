//! Cache Module
//!
//! Provides in-memory memoization of computed answers with TTL expiration.

mod clock;
mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::ResultCache;
