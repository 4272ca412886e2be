//! Movie Cache - A read-through caching repository for movie covers and details
//!
//! Serves a JSON movie catalog over HTTP with cover and details caching.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_cache::api::create_router;
use movie_cache::source::CatalogSource;
use movie_cache::{spawn_cleanup_task, AppState, Config, MovieRepository};

/// Main entry point for the movie cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Load the catalog data source
/// 4. Build the repository and its caches
/// 5. Start background expiry cleanup task
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Movie Cache Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cover_capacity={}, details_capacity={}, ttl={}s, port={}, cleanup_interval={}s",
        config.cover_cache_capacity,
        config.details_cache_capacity,
        config.cache_ttl,
        config.server_port,
        config.cleanup_interval
    );

    let source = CatalogSource::from_path(&config.catalog_path, config.page_size)
        .await
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path))?;

    let repository = MovieRepository::with_image_base_url(
        Arc::new(source),
        &config.image_base_url,
        config.cache_settings(),
    );
    let state = AppState::new(repository);
    info!("Repository initialized");

    let cleanup_handle = spawn_cleanup_task(state.repository.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
