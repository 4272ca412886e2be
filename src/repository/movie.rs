//! Movie Repository
//!
//! Serves covers and details from their caches when fresh and falls back to
//! the data source otherwise, writing fetched values back.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use super::CacheSettings;
use crate::cache::{CacheStats, EntityCache};
use crate::error::{Result, SourceError};
use crate::mapper::{CoverMapper, DetailsMapper, Mapper};
use crate::models::{
    MovieCover, MovieDetailEntity, MovieDetails, MovieEntity, MovieId, SortType,
};
use crate::source::MovieDataSource;

// == Movie Repository ==
/// Read-through repository over a [`MovieDataSource`].
///
/// Owns one cache per entity kind for its whole lifetime. The caches are
/// independent: a details entry for an id says nothing about its cover.
pub struct MovieRepository {
    source: Arc<dyn MovieDataSource>,
    cover_mapper: Arc<dyn Mapper<MovieEntity, MovieCover>>,
    details_mapper: Arc<dyn Mapper<MovieDetailEntity, MovieDetails>>,
    covers: EntityCache<MovieCover>,
    details: EntityCache<MovieDetails>,
}

impl MovieRepository {
    pub fn new(
        source: Arc<dyn MovieDataSource>,
        cover_mapper: Arc<dyn Mapper<MovieEntity, MovieCover>>,
        details_mapper: Arc<dyn Mapper<MovieDetailEntity, MovieDetails>>,
        settings: CacheSettings,
    ) -> Self {
        Self {
            source,
            cover_mapper,
            details_mapper,
            covers: EntityCache::new("covers", settings.cover_capacity, settings.ttl),
            details: EntityCache::new("details", settings.details_capacity, settings.ttl),
        }
    }

    /// Builds a repository with the standard mappers.
    pub fn with_image_base_url(
        source: Arc<dyn MovieDataSource>,
        image_base_url: &str,
        settings: CacheSettings,
    ) -> Self {
        let covers = CoverMapper::new(image_base_url);
        let details = DetailsMapper::new(covers.clone());
        Self::new(source, Arc::new(covers), Arc::new(details), settings)
    }

    // == Bulk Fetch ==
    /// Fetches the first page of covers.
    ///
    /// Always asks the data source. Covers not yet cached are added; cached
    /// ones are left as they are.
    pub async fn get_covers(&self) -> Result<Vec<MovieCover>> {
        let raw = log_failure("covers", None, self.source.get_covers().await)?;
        let covers = self.cover_mapper.map_all(raw);
        self.merge_covers(&covers).await;
        Ok(covers)
    }

    /// Fetches the next page of covers, merging it like [`get_covers`](Self::get_covers).
    pub async fn request_more_covers(&self) -> Result<Vec<MovieCover>> {
        let raw = log_failure("covers", None, self.source.request_more_covers().await)?;
        let covers = self.cover_mapper.map_all(raw);
        self.merge_covers(&covers).await;
        Ok(covers)
    }

    // == Single Fetch ==
    pub async fn get_cover(&self, id: MovieId) -> Result<MovieCover> {
        read_through(&self.covers, id, self.source.get_cover(id), |raw| {
            self.cover_mapper.map(raw)
        })
        .await
    }

    pub async fn get_details(&self, id: MovieId) -> Result<MovieDetails> {
        read_through(&self.details, id, self.source.get_details(id), |raw| {
            self.details_mapper.map(raw)
        })
        .await
    }

    // == Sort ==
    /// Orders the covers currently cached.
    ///
    /// Only live entries are considered and reading them does not refresh
    /// their idle window. The data source is not consulted.
    pub async fn sort_by(&self, sort: SortType) -> Result<Vec<MovieCover>> {
        let mut covers = self.covers.snapshot().await;
        covers.sort_by(|a, b| sort.compare(a, b));
        debug!(%sort, count = covers.len(), "Sorted cached covers");
        Ok(covers)
    }

    /// Adds every cover whose id is not cached yet. Returns how many were added.
    pub async fn merge_covers(&self, covers: &[MovieCover]) -> usize {
        let inserted = self
            .covers
            .merge_absent(covers.iter().map(|cover| (cover.movie_id, cover.clone())))
            .await;
        debug!(
            received = covers.len(),
            inserted, "Merged cover listing into cache"
        );
        inserted
    }

    // == Maintenance ==
    /// Removes expired entries from both caches; returns (covers, details) removed.
    pub async fn purge_expired(&self) -> (usize, usize) {
        (
            self.covers.cleanup_expired().await,
            self.details.cleanup_expired().await,
        )
    }

    pub async fn cover_stats(&self) -> CacheStats {
        self.covers.stats().await
    }

    pub async fn details_stats(&self) -> CacheStats {
        self.details.stats().await
    }

    pub fn covers_cache(&self) -> &EntityCache<MovieCover> {
        &self.covers
    }

    pub fn details_cache(&self) -> &EntityCache<MovieDetails> {
        &self.details
    }
}

/// Cache-aside lookup of one id.
///
/// `fetch` is only awaited on a miss. If the entry vanishes between the
/// presence check and the read, the lookup is treated as a miss.
async fn read_through<V, R, F>(
    cache: &EntityCache<V>,
    id: MovieId,
    fetch: F,
    map: impl FnOnce(R) -> V,
) -> Result<V>
where
    V: Clone,
    F: Future<Output = std::result::Result<R, SourceError>>,
{
    if cache.is_in_cache(id).await {
        match cache.get(id).await {
            Ok(value) => {
                debug!(cache = cache.name(), id, "Cache hit");
                return Ok(value);
            }
            Err(err) => debug!(cache = cache.name(), id, %err, "Entry left the cache before read"),
        }
    } else {
        cache.record_miss().await;
    }

    debug!(cache = cache.name(), id, "Cache miss, fetching from source");
    let raw = log_failure(cache.name(), Some(id), fetch.await)?;
    Ok(remember(cache, id, map(raw)).await)
}

/// Writes a freshly fetched value to the cache and hands it back.
async fn remember<V: Clone>(cache: &EntityCache<V>, id: MovieId, value: V) -> V {
    cache.put(id, value.clone()).await;
    value
}

fn log_failure<T>(
    kind: &'static str,
    id: Option<MovieId>,
    result: std::result::Result<T, SourceError>,
) -> Result<T> {
    result.map_err(|err| {
        warn!(kind, ?id, error = %err, "Data source request failed");
        err.into()
    })
}
