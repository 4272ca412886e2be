//! Data Source Module
//!
//! The repository's upstream: anything able to produce raw movie records.

mod catalog;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{MovieDetailEntity, MovieEntity, MovieId};

pub use catalog::{Catalog, CatalogSource};

/// Supplier of raw movie records.
///
/// Paging state for [`request_more_covers`](MovieDataSource::request_more_covers)
/// belongs to the implementation.
#[async_trait]
pub trait MovieDataSource: Send + Sync {
    /// First page of covers
    async fn get_covers(&self) -> Result<Vec<MovieEntity>, SourceError>;

    /// Fails with [`SourceError::NotFound`] for unknown ids
    async fn get_cover(&self, id: MovieId) -> Result<MovieEntity, SourceError>;

    /// Fails with [`SourceError::NotFound`] for unknown ids
    async fn get_details(&self, id: MovieId) -> Result<MovieDetailEntity, SourceError>;

    /// Next page of covers, empty once exhausted
    async fn request_more_covers(&self) -> Result<Vec<MovieEntity>, SourceError>;
}
