//! Entity Cache Module
//!
//! Shared, thread-safe handle over a [`CacheStore`] keyed by movie id.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;
use crate::models::MovieId;

// == Entity Cache ==
/// One cache namespace (covers or details) shared by every repository caller.
///
/// Clones share the same underlying store. The lock is only held for the
/// duration of a single store operation.
#[derive(Debug)]
pub struct EntityCache<V> {
    /// Namespace label used in logs
    name: &'static str,
    /// Thread-safe cache store
    store: Arc<RwLock<CacheStore<MovieId, V>>>,
}

impl<V> Clone for EntityCache<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> EntityCache<V> {
    /// Creates an empty cache holding at most `capacity` entries, each
    /// expiring after `ttl` without access.
    pub fn new(name: &'static str, capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            name,
            store: Arc::new(RwLock::new(CacheStore::new(capacity, ttl))),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True iff a live entry exists. Does not count as an access.
    pub async fn is_in_cache(&self, id: MovieId) -> bool {
        self.store.read().await.contains(&id)
    }

    /// Reads one value, refreshing its idle window and recency.
    pub async fn get(&self, id: MovieId) -> Result<V> {
        self.store.write().await.get(&id)
    }

    /// Inserts or overwrites a value, evicting the LRU entry when full.
    pub async fn put(&self, id: MovieId, value: V) {
        let evicted = self.store.write().await.put(id, value);
        if let Some(evicted) = evicted {
            debug!(cache = self.name, evicted, "Evicted least recently used entry");
        }
    }

    /// Inserts each item whose id has no live entry yet.
    ///
    /// Live entries keep their value and idle clock. Returns the number of
    /// items inserted.
    pub async fn merge_absent<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = (MovieId, V)>,
    {
        let mut store = self.store.write().await;
        let mut inserted = 0;
        for (id, value) in items {
            if store.insert_if_absent(id, value) {
                inserted += 1;
            }
        }
        inserted
    }

    /// Every live value, in no particular order. Does not count as an access.
    pub async fn snapshot(&self) -> Vec<V> {
        self.store.read().await.values()
    }

    pub async fn record_miss(&self) {
        self.store.write().await.record_miss();
    }

    /// Physically removes expired entries. Returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = EntityCache::new("covers", 10, None);
        let other = cache.clone();

        cache.put(7, "seven").await;

        assert!(other.is_in_cache(7).await);
        assert_eq!(assert_ok!(other.get(7).await), "seven");
    }

    #[tokio::test]
    async fn test_get_missing_fails() {
        let cache: EntityCache<&str> = EntityCache::new("details", 10, None);

        assert_err!(cache.get(1).await);
        assert_eq!(cache.stats().await.misses, 1);
    }

    #[tokio::test]
    async fn test_capacity_two_scenario() {
        let cache = EntityCache::new("covers", 2, None);

        cache.put(1, "A").await;
        cache.put(2, "B").await;
        cache.put(3, "C").await;

        assert!(!cache.is_in_cache(1).await);
        assert_eq!(cache.get(2).await.unwrap(), "B");
        assert_eq!(cache.get(3).await.unwrap(), "C");
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_merge_absent_leaves_existing_entries() {
        let cache = EntityCache::new("covers", 10, None);
        cache.put(5, "X").await;

        let inserted = cache.merge_absent(vec![(5, "Y"), (9, "Z")]).await;

        assert_eq!(inserted, 1);
        assert_eq!(cache.get(5).await.unwrap(), "X");
        assert_eq!(cache.get(9).await.unwrap(), "Z");
    }

    #[tokio::test(start_paused = true)]
    async fn test_merge_absent_does_not_refresh_idle_window() {
        let cache = EntityCache::new("covers", 10, Some(Duration::from_secs(60)));
        cache.put(5, "X").await;

        tokio::time::advance(Duration::from_secs(40)).await;
        assert_eq!(cache.merge_absent(vec![(5, "X")]).await, 0);
        tokio::time::advance(Duration::from_secs(40)).await;

        assert!(!cache.is_in_cache(5).await);
    }

    #[tokio::test]
    async fn test_snapshot_does_not_count_as_access() {
        let cache = EntityCache::new("covers", 10, None);
        cache.put(1, "A").await;
        cache.put(2, "B").await;

        let mut values = cache.snapshot().await;
        values.sort();

        assert_eq!(values, vec!["A", "B"]);
        assert_eq!(cache.stats().await.hits, 0);
    }
}
