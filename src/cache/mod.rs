//! Cache Module
//!
//! Provides in-memory caching with access-based expiration and LRU eviction.

mod entity;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entity::EntityCache;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of entries per cache namespace
pub const DEFAULT_CAPACITY: usize = 100;

/// Default idle window before an entry expires (20 minutes)
pub const DEFAULT_TTL_SECS: u64 = 20 * 60;
