//! Domain-facing movie shapes
//!
//! These are the values stored in the caches and returned to callers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MovieId;
use crate::error::RepositoryError;

/// Lightweight summary of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCover {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub popularity: f64,
    pub average_vote: f64,
}

/// Full record for a single movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub movie_id: MovieId,
    pub cover: MovieCover,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub budget: u64,
    pub revenue: u64,
    pub homepage: Option<String>,
    pub status: Option<String>,
    pub genres: Vec<String>,
    pub similar_movies: Vec<MovieCover>,
}

// == Sort Type ==
/// Orderings available for cover listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortType {
    /// Most popular first
    Popular,
    /// Highest average vote first
    TopRated,
    /// Most recent release first, undated last
    Latest,
}

impl SortType {
    pub const ALL: [SortType; 3] = [SortType::Popular, SortType::TopRated, SortType::Latest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Popular => "popular",
            SortType::TopRated => "top_rated",
            SortType::Latest => "latest",
        }
    }

    /// Compares two covers under this ordering. Ties fall back to ascending id.
    pub fn compare(&self, a: &MovieCover, b: &MovieCover) -> Ordering {
        let primary = match self {
            SortType::Popular => b.popularity.total_cmp(&a.popularity),
            SortType::TopRated => b.average_vote.total_cmp(&a.average_vote),
            // None sorts below Some, so reversing puts undated covers last
            SortType::Latest => b.release_date.cmp(&a.release_date),
        };
        primary.then_with(|| a.movie_id.cmp(&b.movie_id))
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortType::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RepositoryError::InvalidRequest(format!(
                    "Unknown sort type '{}', expected one of: popular, top_rated, latest",
                    s
                ))
            })
    }
}
