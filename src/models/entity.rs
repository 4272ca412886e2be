//! Raw movie records
//!
//! Field names follow the TMDB JSON payloads; optional fields default when
//! absent so partial records still deserialize.

use serde::{Deserialize, Serialize};

use super::MovieId;

/// A movie as listed by the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieEntity {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    /// `YYYY-MM-DD`, sometimes empty upstream
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreEntity {
    pub id: u32,
    pub name: String,
}

/// Full record for a single movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailEntity {
    #[serde(flatten)]
    pub movie: MovieEntity,
    /// Minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreEntity>,
    #[serde(default)]
    pub similar_movies: Vec<MovieEntity>,
}
