//! API Routes
//!
//! Configures the Axum router with all movie cache endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cover_handler, covers_handler, details_handler, health_handler, more_covers_handler,
    sorted_covers_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /covers` - First page of covers
/// - `GET /covers/more` - Next page of covers
/// - `GET /covers/sorted/:sort` - Cached covers ordered by `popular`, `top_rated` or `latest`
/// - `GET /movies/:id/cover` - One cover
/// - `GET /movies/:id/details` - One movie's details
/// - `GET /stats` - Per-cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/covers", get(covers_handler))
        .route("/covers/more", get(more_covers_handler))
        .route("/covers/sorted/:sort", get(sorted_covers_handler))
        .route("/movies/:id/cover", get(cover_handler))
        .route("/movies/:id/details", get(details_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
