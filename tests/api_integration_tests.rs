//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against the sample catalog.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use movie_cache::{
    api::create_router, source::CatalogSource, AppState, CacheSettings, MovieRepository,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");

async fn create_test_app(page_size: usize) -> Router {
    let source = CatalogSource::from_path(CATALOG, page_size).await.unwrap();
    let repository = MovieRepository::with_image_base_url(
        Arc::new(source),
        "https://img.test/w342",
        CacheSettings::default(),
    );
    create_router(AppState::new(repository))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn ids(json: &Value) -> Vec<u64> {
    json["covers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cover| cover["movie_id"].as_u64().unwrap())
        .collect()
}

// == Listing Endpoints ==

#[tokio::test]
async fn test_covers_endpoint_returns_first_page() {
    let app = create_test_app(4).await;

    let (status, json) = get(&app, "/covers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    assert_eq!(ids(&json), vec![550, 680, 27205, 157336]);
    assert_eq!(
        json["covers"][0]["poster_url"],
        "https://img.test/w342/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
    );
    assert_eq!(json["covers"][0]["release_date"], "1999-10-15");
}

#[tokio::test]
async fn test_more_covers_endpoint_pages_until_empty() {
    let app = create_test_app(4).await;

    get(&app, "/covers").await;
    let (status, json) = get(&app, "/covers/more").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![603, 13]);

    let (_, json) = get(&app, "/covers/more").await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_listing_populates_cover_cache() {
    let app = create_test_app(10).await;

    get(&app, "/covers").await;
    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["covers"]["total_entries"], 6);
    assert_eq!(stats["covers"]["capacity"], 100);
    assert_eq!(stats["covers"]["ttl_secs"], 1200);
    assert_eq!(stats["details"]["total_entries"], 0);

    let (status, cover) = get(&app, "/movies/603/cover").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cover["title"], "The Matrix");

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["covers"]["hits"], 1);
    assert_eq!(stats["covers"]["misses"], 0);
}

// == Single Item Endpoints ==

#[tokio::test]
async fn test_details_endpoint_miss_then_hit() {
    let app = create_test_app(10).await;

    let (status, first) = get(&app, "/movies/27205/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["cover"]["title"], "Inception");
    assert_eq!(first["runtime_minutes"], 148);
    assert_eq!(first["genres"][1], "Science Fiction");
    assert_eq!(first["similar_movies"][0]["movie_id"], 157336);

    let (_, second) = get(&app, "/movies/27205/details").await;
    assert_eq!(first, second);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["details"]["misses"], 1);
    assert_eq!(stats["details"]["hits"], 1);
    assert_eq!(stats["details"]["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_details_do_not_populate_cover_cache() {
    let app = create_test_app(10).await;

    get(&app, "/movies/550/details").await;
    let (_, stats) = get(&app, "/stats").await;

    assert_eq!(stats["details"]["total_entries"], 1);
    assert_eq!(stats["covers"]["total_entries"], 0);
}

#[tokio::test]
async fn test_unknown_movie_returns_404_with_error_body() {
    let app = create_test_app(10).await;

    let (status, json) = get(&app, "/movies/999999/cover").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("999999"));

    // Movie listed but without a details record
    let (status, _) = get(&app, "/movies/680/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["covers"]["total_entries"], 0);
    assert_eq!(stats["details"]["total_entries"], 0);
}

// == Sort Endpoint ==

#[tokio::test]
async fn test_sorted_endpoint_orders_cached_covers() {
    let app = create_test_app(10).await;
    get(&app, "/covers").await;

    let (status, popular) = get(&app, "/covers/sorted/popular").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&popular), vec![157336, 27205, 603, 680, 550, 13]);

    let (_, latest) = get(&app, "/covers/sorted/latest").await;
    assert_eq!(ids(&latest), vec![157336, 27205, 550, 603, 680, 13]);

    let (_, top_rated) = get(&app, "/covers/sorted/top_rated").await;
    assert_eq!(ids(&top_rated), vec![13, 680, 550, 27205, 157336, 603]);
}

#[tokio::test]
async fn test_sorted_endpoint_rejects_unknown_sort() {
    let app = create_test_app(10).await;

    let (status, json) = get(&app, "/covers/sorted/favorite").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("favorite"));
}

#[tokio::test]
async fn test_sorted_endpoint_empty_before_any_listing() {
    let app = create_test_app(10).await;

    let (status, json) = get(&app, "/covers/sorted/popular").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(10).await;

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let app = create_test_app(10).await;

    let (status, _) = get(&app, "/movies/-1/cover").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
