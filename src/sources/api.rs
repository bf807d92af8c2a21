//! HTTP client for the storefront REST endpoints.

use std::time::Duration;

use serde::Deserialize;

use super::{ArtworkQuery, ArtworkSource, Result};
use crate::error::FetchError;
use crate::state::Artwork;

/// Body of `GET /api/artwork`.
#[derive(Debug, Deserialize)]
struct ArtworkListResponse {
    /// Matching artworks as raw records; absent on malformed responses.
    #[serde(default)]
    artworks: Option<Vec<serde_json::Value>>,
}

/// Body of `GET /api/settings/hero-image`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeroImageResponse {
    /// Configured hero image, `null` when unset.
    #[serde(default)]
    image_url: Option<String>,
}

/// `reqwest`-backed [`ArtworkSource`].
#[derive(Clone, Debug)]
pub struct StorefrontApi {
    /// Shared client with connection pooling.
    client: reqwest::Client,
    /// Base URL without trailing slash, e.g. `http://localhost:3000`.
    base_url: String,
}

impl StorefrontApi {
    /// What: Build a client for the storefront at `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Scheme and host of the shop (a trailing `/` is ignored)
    /// - `timeout`: Total per-request timeout
    ///
    /// Output:
    /// - `Ok(StorefrontApi)`; `Err(FetchError::Network)` if the TLS/HTTP client cannot be built.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest` fails to initialize its client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("atelier/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: GET `path` and decode the JSON body as `T`.
    ///
    /// Details:
    /// - Non-2xx statuses become `FetchError::Status`
    /// - Body decoding failures become `FetchError::Decode`
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(url = %url, "[Api] GET");
        let resp = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        let body = resp.json::<T>().await?;
        Ok(body)
    }
}

/// What: Decode raw artwork records one at a time.
///
/// Inputs:
/// - `records`: Raw JSON records in server order
///
/// Output:
/// - Decoded artworks; records that do not decode are logged and skipped.
fn decode_records(records: Vec<serde_json::Value>) -> Vec<Artwork> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("?")
                .to_string();
            match serde_json::from_value::<Artwork>(record) {
                Ok(artwork) => Some(artwork),
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "[Api] skipping undecodable artwork");
                    None
                }
            }
        })
        .collect()
}

/// What: Drop artworks that break the non-negative price invariant.
///
/// Inputs:
/// - `artworks`: Decoded list in server order
///
/// Output:
/// - List without invalid entries; each dropped entry is logged.
fn retain_valid_prices(artworks: Vec<Artwork>) -> Vec<Artwork> {
    artworks
        .into_iter()
        .filter(|a| {
            let ok = a.has_valid_price();
            if !ok {
                tracing::warn!(id = %a.id, price = a.price, "[Api] dropping artwork with invalid price");
            }
            ok
        })
        .collect()
}

impl ArtworkSource for StorefrontApi {
    async fn fetch_artworks(&self, query: ArtworkQuery) -> Result<Vec<Artwork>> {
        let path = format!("/api/artwork{}", query.to_query_string());
        let body: ArtworkListResponse = self.get_json(&path).await?;
        let records = body
            .artworks
            .ok_or_else(|| FetchError::Decode("response has no `artworks` field".to_string()))?;
        let artworks = retain_valid_prices(decode_records(records));
        tracing::debug!(count = artworks.len(), "[Api] artworks fetched");
        Ok(artworks)
    }

    async fn fetch_hero_image(&self) -> Result<Option<String>> {
        let body: HeroImageResponse = self.get_json("/api/settings/hero-image").await?;
        Ok(body.image_url.filter(|url| !url.trim().is_empty()))
    }
}
