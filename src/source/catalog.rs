//! JSON catalog data source
//!
//! Serves movies from an in-memory catalog, usually loaded from a file of
//! the form `{"movies": [...], "details": [...]}`.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::MovieDataSource;
use crate::error::SourceError;
use crate::models::{MovieDetailEntity, MovieEntity, MovieId};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<MovieEntity>,
    #[serde(default)]
    pub details: Vec<MovieDetailEntity>,
}

/// Local data source paging through a fixed catalog.
#[derive(Debug)]
pub struct CatalogSource {
    catalog: Catalog,
    page_size: usize,
    /// Index of the page `request_more_covers` returns next
    next_page: AtomicUsize,
}

impl CatalogSource {
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            next_page: AtomicUsize::new(1),
        }
    }

    /// Loads a catalog from a JSON file.
    ///
    /// I/O failures map to [`SourceError::Transport`], malformed JSON to
    /// [`SourceError::Parse`].
    pub async fn from_path(path: impl AsRef<Path>, page_size: usize) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await?;
        let catalog: Catalog = serde_json::from_slice(&raw)?;
        info!(
            "Loaded catalog from {}: {} movies, {} details",
            path.display(),
            catalog.movies.len(),
            catalog.details.len()
        );
        Ok(Self::new(catalog, page_size))
    }

    fn page(&self, index: usize) -> Vec<MovieEntity> {
        self.catalog
            .movies
            .iter()
            .skip(index.saturating_mul(self.page_size))
            .take(self.page_size)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MovieDataSource for CatalogSource {
    async fn get_covers(&self) -> Result<Vec<MovieEntity>, SourceError> {
        self.next_page.store(1, Ordering::SeqCst);
        Ok(self.page(0))
    }

    async fn get_cover(&self, id: MovieId) -> Result<MovieEntity, SourceError> {
        self.catalog
            .movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(SourceError::NotFound(id))
    }

    async fn get_details(&self, id: MovieId) -> Result<MovieDetailEntity, SourceError> {
        self.catalog
            .details
            .iter()
            .find(|details| details.movie.id == id)
            .cloned()
            .ok_or(SourceError::NotFound(id))
    }

    async fn request_more_covers(&self) -> Result<Vec<MovieEntity>, SourceError> {
        let index = self.next_page.fetch_add(1, Ordering::SeqCst);
        let page = self.page(index);
        debug!(page = index, movies = page.len(), "Serving next catalog page");
        Ok(page)
    }
}
