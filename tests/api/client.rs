//! `StorefrontApi` request shapes and error mapping.
//!
//! Tests cover:
//! - Query parameters sent for the shop and home listings
//! - Status and decode failures
//! - Hero image `null`/empty handling

use std::time::Duration;

use atelier::error::FetchError;
use atelier::sources::{ArtworkQuery, ArtworkSource, StorefrontApi};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// What: Client pointed at the mock server.
fn client(server: &MockServer) -> StorefrontApi {
    StorefrontApi::new(&server.uri(), Duration::from_secs(5)).expect("client")
}

#[tokio::test]
/// What: Shop listing sends `inStock=true` and decodes camelCase records
///
/// - Input: Server returning two artworks, one with a negative price
/// - Output: Only the valid artwork, fields decoded
async fn shop_query_decodes_artworks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/artwork"))
        .and(query_param("inStock", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artworks": [
                {
                    "id": "a1",
                    "slug": "sunrise",
                    "title": "Sunrise",
                    "medium": "Oil on canvas",
                    "year": 2023,
                    "price": 450,
                    "images": [{"url": "https://img/sunrise.jpg", "alt": "Sunrise"}],
                    "createdAt": "2024-03-01T10:00:00.000Z",
                    "inStock": true,
                    "featured": false
                },
                {
                    "id": "bad",
                    "slug": "bad",
                    "title": "Bad",
                    "medium": "Ink",
                    "year": 2020,
                    "price": -1,
                    "images": [],
                    "inStock": true,
                    "featured": false
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let artworks = client(&server)
        .fetch_artworks(ArtworkQuery::SHOP)
        .await
        .expect("artworks");
    assert_eq!(artworks.len(), 1);
    let a = &artworks[0];
    assert_eq!(a.slug, "sunrise");
    assert_eq!(a.year, 2023);
    assert_eq!(a.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));
    assert_eq!(a.primary_image().map(|i| i.url.as_str()), Some("https://img/sunrise.jpg"));
}

#[tokio::test]
/// What: A record with `null` display fields loads next to a valid one
///
/// - Input: One complete record and one with `title`, `images` and `medium` set to `null`
/// - Output: Both decoded; the sparse one has empty title and no primary image
async fn null_display_fields_do_not_fail_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/artwork"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artworks": [
                {
                    "id": "full",
                    "slug": "full",
                    "title": "Full",
                    "medium": "Oil",
                    "year": 2024,
                    "price": 300,
                    "images": [{"url": "https://img/full.jpg", "alt": null}],
                    "inStock": true,
                    "featured": false
                },
                {
                    "id": "sparse",
                    "slug": "sparse",
                    "title": null,
                    "medium": null,
                    "year": 2022,
                    "price": 150,
                    "images": null,
                    "createdAt": null,
                    "inStock": true,
                    "featured": false
                }
            ]
        })))
        .mount(&server)
        .await;

    let artworks = client(&server)
        .fetch_artworks(ArtworkQuery::SHOP)
        .await
        .expect("listing decodes");
    let ids: Vec<&str> = artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["full", "sparse"]);
    assert_eq!(artworks[1].title, "");
    assert!(artworks[1].primary_image().is_none());
    assert_eq!(artworks[0].primary_image().and_then(|i| i.alt.as_deref()), None);
}

#[tokio::test]
/// What: Home listing sends both `featured=true` and `inStock=true`
async fn home_query_sends_both_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/artwork"))
        .and(query_param("featured", "true"))
        .and(query_param("inStock", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "artworks": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let artworks = client(&server)
        .fetch_artworks(ArtworkQuery::HOME_FEATURED)
        .await
        .expect("artworks");
    assert!(artworks.is_empty());
}

#[tokio::test]
/// What: A body without `artworks` is a decode error
async fn missing_artworks_field_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/artwork"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_artworks(ArtworkQuery::SHOP)
        .await
        .expect_err("decode failure");
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
/// What: Non-2xx answers map to `FetchError::Status` with the code
async fn server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/artwork"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_artworks(ArtworkQuery::SHOP)
        .await
        .expect_err("status failure");
    assert!(
        matches!(err, FetchError::Status { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
/// What: Unreachable hosts map to `FetchError::Network`
async fn unreachable_host_is_network_error() {
    let api = StorefrontApi::new("http://127.0.0.1:9", Duration::from_secs(2)).expect("client");
    let err = api
        .fetch_artworks(ArtworkQuery::SHOP)
        .await
        .expect_err("network failure");
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
/// What: Hero image URL is returned; `null` and empty strings mean none
async fn hero_image_variants() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settings/hero-image"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "imageUrl": "https://img/hero.jpg" })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/settings/hero-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "imageUrl": null })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/settings/hero-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "imageUrl": "" })))
        .mount(&server)
        .await;

    let api = client(&server);
    assert_eq!(
        api.fetch_hero_image().await.expect("hero").as_deref(),
        Some("https://img/hero.jpg")
    );
    assert_eq!(api.fetch_hero_image().await.expect("hero"), None);
    assert_eq!(api.fetch_hero_image().await.expect("hero"), None);
}
