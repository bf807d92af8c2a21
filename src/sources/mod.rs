//! Data sources for the storefront view-models.
//!
//! The view-models only see the [`ArtworkSource`] trait; [`StorefrontApi`] is
//! the HTTP implementation talking to the shop's REST endpoints.

use std::future::Future;

use crate::error::FetchError;
use crate::state::Artwork;

pub mod api;

pub use api::StorefrontApi;

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Server-side filters for `GET /api/artwork`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArtworkQuery {
    /// `featured=` parameter; omitted when `None`.
    pub featured: Option<bool>,
    /// `inStock=` parameter; omitted when `None`.
    pub in_stock: Option<bool>,
}

impl ArtworkQuery {
    /// Query used by the shop listing: available works only.
    pub const SHOP: Self = Self {
        featured: None,
        in_stock: Some(true),
    };

    /// Query used by the home page: featured and available works.
    pub const HOME_FEATURED: Self = Self {
        featured: Some(true),
        in_stock: Some(true),
    };

    /// What: Render the query string (including the leading `?`).
    ///
    /// Output:
    /// - `"?featured=true&inStock=true"`, `"?inStock=true"`, or `""` when no filter is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(2);
        if let Some(featured) = self.featured {
            pairs.push(format!("featured={featured}"));
        }
        if let Some(in_stock) = self.in_stock {
            pairs.push(format!("inStock={in_stock}"));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Read-only access to the artwork catalog and shop settings.
pub trait ArtworkSource: Send + Sync {
    /// Fetch artworks matching `query`, in server order.
    fn fetch_artworks(
        &self,
        query: ArtworkQuery,
    ) -> impl Future<Output = Result<Vec<Artwork>>> + Send;

    /// Fetch the home page hero image URL, `None` when unset.
    fn fetch_hero_image(&self) -> impl Future<Output = Result<Option<String>>> + Send;
}
