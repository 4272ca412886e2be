//! Cache Store Module
//!
//! Synchronous cache engine combining HashMap storage with LRU tracking and
//! access-based expiration. Callers share it through [`EntityCache`].
//!
//! [`EntityCache`]: crate::cache::EntityCache

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::error::{RepositoryError, Result};

// == Cache Store ==
/// Bounded key-value storage with LRU eviction and idle expiration.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Idle window after which an entry counts as absent
    ttl: Option<Duration>,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone + Display,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries, clamped to at least 1
    /// * `ttl` - Idle window before expiry, `None` to never expire
    pub fn new(max_entries: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    // == Contains ==
    /// Returns true if a live entry exists for `key`.
    ///
    /// Pure query: recency, idle clock and statistics are left untouched.
    pub fn contains(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(self.ttl))
    }

    // == Put ==
    /// Stores a value, overwriting any existing one and restarting its idle clock.
    ///
    /// If the key is new and the cache is at capacity, the least recently
    /// used entry is evicted first and its key returned. Replaced or evicted
    /// entries whose idle window had already elapsed count as expirations.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        let mut evicted = None;

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            if let Some(oldest) = self.lru.evict_oldest() {
                match self.entries.remove(&oldest) {
                    Some(entry) if entry.is_expired(self.ttl) => self.stats.record_expirations(1),
                    _ => {
                        self.stats.record_eviction();
                        evicted = Some(oldest);
                    }
                }
            }
        }

        let previous = self.entries.insert(key.clone(), CacheEntry::new(value));
        if previous.is_some_and(|entry| entry.is_expired(self.ttl)) {
            self.stats.record_expirations(1);
        }
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Insert If Absent ==
    /// Stores a value only if no live entry exists for `key`.
    ///
    /// A live entry keeps its value and idle clock. Returns true if inserted.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.put(key, value);
        true
    }

    // == Get ==
    /// Retrieves a value by key, counting as an access.
    ///
    /// Expired entries are removed and reported as `Expired`.
    pub fn get(&mut self, key: &K) -> Result<V> {
        let ttl = self.ttl;
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return Err(RepositoryError::CacheMiss(key.to_string()));
        };

        if entry.is_expired(ttl) {
            self.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return Err(RepositoryError::Expired(key.to_string()));
        }

        entry.touch();
        let value = entry.value.clone();
        self.lru.touch(key);
        self.stats.record_hit();
        Ok(value)
    }

    // == Remove ==
    /// Removes an entry by key. Returns true if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Values ==
    /// Clones every live value without counting as an access.
    pub fn values(&self) -> Vec<V> {
        self.entries
            .values()
            .filter(|entry| !entry.is_expired(self.ttl))
            .map(|entry| entry.value.clone())
            .collect()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(ttl))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Record Miss ==
    /// Counts a lookup that was answered without reading the cache.
    pub fn record_miss(&mut self) {
        self.stats.record_miss();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats.capacity = self.max_entries;
        stats.ttl_secs = self.ttl.map(|ttl| ttl.as_secs());
        stats
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
