//! API Handlers
//!
//! HTTP request handlers for each movie cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{
    CoversResponse, HealthResponse, MovieCover, MovieDetails, MovieId, SortType, StatsResponse,
};
use crate::repository::MovieRepository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<MovieRepository>,
}

impl AppState {
    pub fn new(repository: MovieRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

/// Handler for GET /covers
pub async fn covers_handler(State(state): State<AppState>) -> Result<Json<CoversResponse>> {
    let covers = state.repository.get_covers().await?;
    Ok(Json(CoversResponse::new(covers)))
}

/// Handler for GET /covers/more
pub async fn more_covers_handler(State(state): State<AppState>) -> Result<Json<CoversResponse>> {
    let covers = state.repository.request_more_covers().await?;
    Ok(Json(CoversResponse::new(covers)))
}

/// Handler for GET /covers/sorted/:sort
///
/// Unknown sort names are rejected with 400.
pub async fn sorted_covers_handler(
    State(state): State<AppState>,
    Path(sort): Path<String>,
) -> Result<Json<CoversResponse>> {
    let sort: SortType = sort.parse()?;
    let covers = state.repository.sort_by(sort).await?;
    Ok(Json(CoversResponse::new(covers)))
}

/// Handler for GET /movies/:id/cover
pub async fn cover_handler(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> Result<Json<MovieCover>> {
    Ok(Json(state.repository.get_cover(id).await?))
}

/// Handler for GET /movies/:id/details
pub async fn details_handler(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> Result<Json<MovieDetails>> {
    Ok(Json(state.repository.get_details(id).await?))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let covers = state.repository.cover_stats().await;
    let details = state.repository.details_stats().await;
    Json(StatsResponse::new(covers, details))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
