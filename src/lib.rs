//! Movie Cache - A read-through caching repository for movie covers and details
//!
//! Serves covers and details from bounded, idle-expiring caches and falls
//! back to a data source on a miss.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod source;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use repository::{CacheSettings, MovieRepository};
pub use tasks::spawn_cleanup_task;
