//! Data models for the movie cache
//!
//! - `entity`: raw records as delivered by a data source
//! - `domain`: the cover and details shapes handed to callers
//! - `responses`: DTOs serialized by the HTTP API

pub mod domain;
pub mod entity;
pub mod responses;

// Re-export commonly used types
pub use domain::{MovieCover, MovieDetails, SortType};
pub use entity::{GenreEntity, MovieDetailEntity, MovieEntity};
pub use responses::{CoversResponse, ErrorResponse, HealthResponse, StatsResponse};

/// Identifier shared by covers and details.
pub type MovieId = u32;
