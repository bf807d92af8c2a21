//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::Artwork;

#[cfg(test)]
/// What: Build a minimal in-stock artwork for listing tests.
///
/// Inputs:
/// - `id`: Identifier (also used for slug and title)
/// - `price`: Asking price
/// - `created_at`: Optional ISO 8601 creation timestamp
///
/// Output: `Artwork` with no images
pub fn artwork(id: &str, price: f64, created_at: Option<&str>) -> Artwork {
    Artwork {
        id: id.to_string(),
        slug: format!("{id}-slug"),
        title: format!("Artwork {id}"),
        medium: "Oil on canvas".to_string(),
        year: 2024,
        price,
        images: Vec::new(),
        created_at: created_at.map(ToString::to_string),
        in_stock: true,
        featured: false,
    }
}

#[cfg(test)]
/// In-memory [`crate::sources::ArtworkSource`] returning canned responses.
pub struct FakeSource {
    /// Response for artwork requests.
    artworks: Result<Vec<Artwork>, crate::error::FetchError>,
    /// Response for hero image requests.
    hero: Result<Option<String>, crate::error::FetchError>,
    /// Queries received, in call order.
    queries: std::sync::Mutex<Vec<crate::sources::ArtworkQuery>>,
}

#[cfg(test)]
impl FakeSource {
    /// What: Source answering every artwork request with `artworks` and no hero image.
    pub fn ok(artworks: Vec<Artwork>) -> Self {
        Self {
            artworks: Ok(artworks),
            hero: Ok(None),
            queries: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// What: Source failing every request with `error`.
    pub fn failing(error: crate::error::FetchError) -> Self {
        Self {
            artworks: Err(error.clone()),
            hero: Err(error),
            queries: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Replace the hero image response.
    pub fn with_hero(mut self, hero: Result<Option<String>, crate::error::FetchError>) -> Self {
        self.hero = hero;
        self
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<crate::sources::ArtworkQuery> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[cfg(test)]
impl crate::sources::ArtworkSource for FakeSource {
    async fn fetch_artworks(
        &self,
        query: crate::sources::ArtworkQuery,
    ) -> crate::sources::Result<Vec<Artwork>> {
        self.queries.lock().expect("queries lock").push(query);
        self.artworks.clone()
    }

    async fn fetch_hero_image(&self) -> crate::sources::Result<Option<String>> {
        self.hero.clone()
    }
}
