//! Error types for the movie cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use thiserror::Error;

use crate::models::{ErrorResponse, MovieId};

// == Source Error Enum ==
/// Failure of a data source to produce a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The id is unknown upstream
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    /// Network or storage fault
    #[error("Data source unavailable: {0}")]
    Transport(String),

    /// Payload could not be decoded
    #[error("Malformed data source payload: {0}")]
    Parse(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

// == Repository Error Enum ==
/// Unified error type for the movie cache.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Key not present in a cache
    #[error("Key not found in cache: {0}")]
    CacheMiss(String),

    /// Key was present but its idle window elapsed
    #[error("Key expired: {0}")]
    Expired(String),

    /// Data source failure, passed through unmodified
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RepositoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RepositoryError::CacheMiss(_) | RepositoryError::Expired(_) => StatusCode::NOT_FOUND,
            RepositoryError::Source(SourceError::NotFound(_)) => StatusCode::NOT_FOUND,
            RepositoryError::Source(_) => StatusCode::BAD_GATEWAY,
            RepositoryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RepositoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the movie cache.
pub type Result<T> = std::result::Result<T, RepositoryError>;
