//! Response DTOs for the movie cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::MovieCover;
use crate::cache::CacheStats;

/// Response body for cover listings
#[derive(Debug, Clone, Serialize)]
pub struct CoversResponse {
    /// Number of covers in this page
    pub count: usize,
    pub covers: Vec<MovieCover>,
}

impl CoversResponse {
    pub fn new(covers: Vec<MovieCover>) -> Self {
        Self {
            count: covers.len(),
            covers,
        }
    }
}

/// Statistics of one cache namespace
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsBody {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub capacity: usize,
    /// Idle window in seconds, null when entries never expire
    pub ttl_secs: Option<u64>,
}

impl From<CacheStats> for CacheStatsBody {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            ttl_secs: stats.ttl_secs,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub covers: CacheStatsBody,
    pub details: CacheStatsBody,
}

impl StatsResponse {
    pub fn new(covers: CacheStats, details: CacheStats) -> Self {
        Self {
            covers: covers.into(),
            details: details.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_response_counts() {
        let resp = CoversResponse::new(Vec::new());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json["covers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let covers = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            expirations: 1,
            total_entries: 100,
            capacity: 100,
            ttl_secs: Some(1200),
        };
        let resp = StatsResponse::new(covers, CacheStats::default());

        assert!((resp.covers.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.details.hit_rate, 0.0);
        assert_eq!(resp.covers.expirations, 1);
        assert_eq!(resp.covers.capacity, 100);
        assert_eq!(resp.covers.ttl_secs, Some(1200));
        assert_eq!(resp.details.ttl_secs, None);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
