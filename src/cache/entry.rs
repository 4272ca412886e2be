//! Cache Entry Module
//!
//! Defines a single cache entry with access-based expiration.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored value plus the timestamps used for expiration.
///
/// Expiration is measured from the last access, not from creation: every
/// successful read or overwrite restarts the window.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was last read or overwritten
    pub last_accessed: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry whose access clock starts now.
    pub fn new(value: V) -> Self {
        Self {
            value,
            last_accessed: Instant::now(),
        }
    }

    // == Touch ==
    /// Restarts the expiration window.
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }

    // == Is Expired ==
    /// Checks whether the entry has been idle for at least `ttl`.
    ///
    /// Boundary condition: an entry idle for exactly `ttl` is expired.
    /// A `None` ttl never expires.
    pub fn is_expired(&self, ttl: Option<Duration>) -> bool {
        match ttl {
            Some(ttl) => self.idle_time() >= ttl,
            None => false,
        }
    }

    // == Idle Time ==
    /// Time elapsed since the last access.
    pub fn idle_time(&self) -> Duration {
        Instant::now().saturating_duration_since(self.last_accessed)
    }
}
