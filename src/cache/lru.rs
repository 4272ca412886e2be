//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch pushes a `(key, stamp)` pair onto the front of a VecDeque and
/// records the stamp as the key's current one. Older pairs for the same key
/// become stale and are skipped when they reach the back, which keeps
/// `touch`, `remove` and `evict_oldest` O(1) amortized.
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Access log, possibly containing stale pairs
    order: VecDeque<(K, u64)>,
    /// Current stamp of every tracked key
    stamps: HashMap<K, u64>,
    /// Monotonic access counter
    clock: u64,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
            stamps: HashMap::new(),
            clock: 0,
        }
    }
}

impl<K: Hash + Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &K) {
        self.clock += 1;
        self.stamps.insert(key.clone(), self.clock);
        self.order.push_front((key.clone(), self.clock));
        self.compact_if_sparse();
    }

    // == Remove ==
    /// Stops tracking a key. Its pairs in the log go stale.
    pub fn remove(&mut self, key: &K) {
        self.stamps.remove(key);
        self.compact_if_sparse();
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        while let Some((key, stamp)) = self.order.pop_back() {
            if self.stamps.get(&key) == Some(&stamp) {
                self.stamps.remove(&key);
                return Some(key);
            }
        }
        None
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.stamps.contains_key(key)
    }

    /// Drops stale pairs once they outnumber live ones.
    fn compact_if_sparse(&mut self) {
        if self.order.len() > 2 * self.stamps.len() + 16 {
            let stamps = &self.stamps;
            self.order
                .retain(|(key, stamp)| stamps.get(key) == Some(stamp));
        }
    }
}
