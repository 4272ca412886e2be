//! Expiry Cleanup Task
//!
//! Background task that periodically removes expired entries from the
//! repository caches. Expired entries are already invisible to readers; this
//! only reclaims their memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::repository::MovieRepository;

/// Spawns a background task that periodically purges expired cache entries.
///
/// # Arguments
/// * `repository` - Repository whose caches are swept
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cleanup_handle = spawn_cleanup_task(state.repository.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    repository: Arc<MovieRepository>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (covers, details) = repository.purge_expired().await;

            if covers + details > 0 {
                info!(
                    "Expiry cleanup: removed {} covers and {} details",
                    covers, details
                );
            } else {
                debug!("Expiry cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieEntity;
    use crate::repository::CacheSettings;
    use crate::source::{Catalog, CatalogSource};

    fn repository(ttl: Duration) -> Arc<MovieRepository> {
        let catalog = Catalog {
            movies: vec![MovieEntity {
                id: 1,
                title: "One".to_string(),
                ..Default::default()
            }],
            details: Vec::new(),
        };
        let settings = CacheSettings {
            ttl: Some(ttl),
            ..CacheSettings::default()
        };
        Arc::new(MovieRepository::with_image_base_url(
            Arc::new(CatalogSource::new(catalog, 20)),
            "https://img.test",
            settings,
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let repository = repository(Duration::from_secs(2));
        repository.get_cover(1).await.unwrap();

        let handle = spawn_cleanup_task(repository.clone(), 1);

        tokio::time::sleep(Duration::from_millis(3500)).await;

        assert!(repository.covers_cache().is_empty().await);
        assert_eq!(repository.cover_stats().await.expirations, 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_valid_entries() {
        let repository = repository(Duration::from_secs(3600));
        repository.get_cover(1).await.unwrap();

        let handle = spawn_cleanup_task(repository.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(repository.covers_cache().is_in_cache(1).await);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(repository(Duration::from_secs(60)), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
