//! API Module
//!
//! HTTP handlers and routing exposing the movie repository.
//!
//! # Endpoints
//! - `GET /covers` - First page of covers
//! - `GET /covers/more` - Next page of covers
//! - `GET /covers/sorted/:sort` - Cached covers in a given order
//! - `GET /movies/:id/cover` - One cover
//! - `GET /movies/:id/details` - One movie's details
//! - `GET /stats` - Per-cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
