//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL_SECS};
use crate::repository::CacheSettings;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of covers kept in cache
    pub cover_cache_capacity: usize,
    /// Maximum number of details kept in cache
    pub details_cache_capacity: usize,
    /// Idle seconds before a cached entry expires, 0 = never
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// JSON catalog served by the local data source
    pub catalog_path: String,
    /// Covers per page for listing requests
    pub page_size: usize,
    /// Prefix for poster and backdrop paths
    pub image_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `COVER_CACHE_CAPACITY` - Cover cache entries (default: 100)
    /// - `DETAILS_CACHE_CAPACITY` - Details cache entries (default: 100)
    /// - `CACHE_TTL` - Idle expiry in seconds, 0 disables (default: 1200)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `CATALOG_PATH` - Catalog file (default: data/catalog.json)
    /// - `PAGE_SIZE` - Covers per page (default: 20)
    /// - `IMAGE_BASE_URL` - Image prefix (default: https://image.tmdb.org/t/p/w342)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cover_cache_capacity: parse_var("COVER_CACHE_CAPACITY")
                .unwrap_or(defaults.cover_cache_capacity),
            details_cache_capacity: parse_var("DETAILS_CACHE_CAPACITY")
                .unwrap_or(defaults.details_cache_capacity),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            catalog_path: env::var("CATALOG_PATH").unwrap_or(defaults.catalog_path),
            page_size: parse_var("PAGE_SIZE").unwrap_or(defaults.page_size),
            image_base_url: env::var("IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
        }
    }

    /// Cache parameters for the repository.
    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            cover_capacity: self.cover_cache_capacity,
            details_capacity: self.details_cache_capacity,
            ttl: (self.cache_ttl > 0).then(|| Duration::from_secs(self.cache_ttl)),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cover_cache_capacity: DEFAULT_CAPACITY,
            details_cache_capacity: DEFAULT_CAPACITY,
            cache_ttl: DEFAULT_TTL_SECS,
            server_port: 3000,
            cleanup_interval: 60,
            catalog_path: "data/catalog.json".to_string(),
            page_size: 20,
            image_base_url: "https://image.tmdb.org/t/p/w342".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cover_cache_capacity, 100);
        assert_eq!(config.details_cache_capacity, 100);
        assert_eq!(config.cache_ttl, 1200);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_cache_settings_from_config() {
        let settings = Config::default().cache_settings();
        assert_eq!(settings.cover_capacity, 100);
        assert_eq!(settings.ttl, Some(Duration::from_secs(1200)));
    }

    #[test]
    fn test_zero_ttl_disables_expiry() {
        let config = Config {
            cache_ttl: 0,
            ..Config::default()
        };
        assert_eq!(config.cache_settings().ttl, None);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for name in [
            "COVER_CACHE_CAPACITY",
            "DETAILS_CACHE_CAPACITY",
            "CACHE_TTL",
            "SERVER_PORT",
            "CLEANUP_INTERVAL",
            "CATALOG_PATH",
            "PAGE_SIZE",
            "IMAGE_BASE_URL",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.cover_cache_capacity, 100);
        assert_eq!(config.cache_ttl, 1200);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.catalog_path, "data/catalog.json");
    }
}
