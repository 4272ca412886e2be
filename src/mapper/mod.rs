//! Mapper Module
//!
//! Pure transforms from raw source records to the shapes handed to callers.

use chrono::NaiveDate;

use crate::models::{MovieCover, MovieDetailEntity, MovieDetails, MovieEntity};

/// Total, side-effect free conversion from a raw record to its domain shape.
pub trait Mapper<Raw, Domain>: Send + Sync {
    fn map(&self, raw: Raw) -> Domain;

    fn map_all(&self, raw: Vec<Raw>) -> Vec<Domain> {
        raw.into_iter().map(|item| self.map(item)).collect()
    }
}

// == Cover Mapper ==
/// Maps [`MovieEntity`] to [`MovieCover`], resolving image paths against a base URL.
#[derive(Debug, Clone)]
pub struct CoverMapper {
    image_base_url: String,
}

impl CoverMapper {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn image_url(&self, path: Option<String>) -> Option<String> {
        path.filter(|p| !p.trim().is_empty())
            .map(|p| format!("{}/{}", self.image_base_url, p.trim_start_matches('/')))
    }
}

/// Parses `YYYY-MM-DD`; anything else is treated as unknown.
fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|date| NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok())
}

impl Mapper<MovieEntity, MovieCover> for CoverMapper {
    fn map(&self, movie: MovieEntity) -> MovieCover {
        MovieCover {
            movie_id: movie.id,
            release_date: parse_release_date(movie.release_date.as_deref()),
            poster_url: self.image_url(movie.poster_path),
            backdrop_url: self.image_url(movie.backdrop_path),
            title: movie.title,
            popularity: movie.popularity,
            average_vote: movie.vote_average,
        }
    }
}

// == Details Mapper ==
/// Maps [`MovieDetailEntity`] to [`MovieDetails`]; the embedded cover and the
/// similar movies go through a [`CoverMapper`].
#[derive(Debug, Clone)]
pub struct DetailsMapper {
    covers: CoverMapper,
}

impl DetailsMapper {
    pub fn new(covers: CoverMapper) -> Self {
        Self { covers }
    }
}

impl Mapper<MovieDetailEntity, MovieDetails> for DetailsMapper {
    fn map(&self, details: MovieDetailEntity) -> MovieDetails {
        let overview = details.movie.overview.clone();
        let cover = self.covers.map(details.movie);

        MovieDetails {
            movie_id: cover.movie_id,
            cover,
            overview,
            tagline: details.tagline.filter(|t| !t.is_empty()),
            runtime_minutes: details.runtime.filter(|minutes| *minutes > 0),
            budget: details.budget,
            revenue: details.revenue,
            homepage: details.homepage.filter(|h| !h.is_empty()),
            status: details.status,
            genres: details.genres.into_iter().map(|genre| genre.name).collect(),
            similar_movies: self.covers.map_all(details.similar_movies),
        }
    }
}
