//! Repository Module
//!
//! Cache-aside access to movie covers and details.

mod movie;

use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL_SECS};

pub use movie::MovieRepository;

/// Sizing of the two repository caches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheSettings {
    pub cover_capacity: usize,
    pub details_capacity: usize,
    /// Idle window shared by both caches, `None` to never expire
    pub ttl: Option<Duration>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            cover_capacity: DEFAULT_CAPACITY,
            details_capacity: DEFAULT_CAPACITY,
            ttl: Some(Duration::from_secs(DEFAULT_TTL_SECS)),
        }
    }
}
