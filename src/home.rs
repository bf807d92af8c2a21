//! Home page view-model: featured works and the hero image.

use crate::sources::{ArtworkQuery, ArtworkSource};
use crate::state::Artwork;

/// Number of featured works shown on the home page by default.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Data behind the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeViewModel {
    /// Featured, in-stock works (at most `featured_limit`).
    featured: Vec<Artwork>,
    /// Hero image URL; `None` renders the plain background.
    hero_image: Option<String>,
    /// Maximum number of featured works kept.
    featured_limit: usize,
}

impl HomeViewModel {
    /// What: Empty home view keeping at most `featured_limit` featured works.
    #[must_use]
    pub const fn new(featured_limit: usize) -> Self {
        Self {
            featured: Vec::new(),
            hero_image: None,
            featured_limit,
        }
    }

    /// What: Fetch featured works and the hero image.
    ///
    /// Inputs:
    /// - `source`: Artwork source
    ///
    /// Output:
    /// - Updates the view in place; failures are logged and leave the matching field unchanged.
    ///
    /// Details:
    /// - Both requests run concurrently; one failing does not prevent the other from applying.
    /// - Featured works use `featured=true&inStock=true` and are truncated to the limit.
    pub async fn load<S: ArtworkSource>(&mut self, source: &S) {
        let (featured, hero) = futures::join!(
            source.fetch_artworks(ArtworkQuery::HOME_FEATURED),
            source.fetch_hero_image()
        );
        match featured {
            Ok(mut artworks) => {
                artworks.truncate(self.featured_limit);
                tracing::debug!(count = artworks.len(), "[Home] featured works loaded");
                self.featured = artworks;
            }
            Err(e) => tracing::warn!(error = %e, "[Home] error fetching featured works"),
        }
        match hero {
            Ok(url) => self.hero_image = url,
            Err(e) => tracing::warn!(error = %e, "[Home] error fetching hero image"),
        }
    }

    /// Featured works in server order.
    #[must_use]
    pub fn featured(&self) -> &[Artwork] {
        &self.featured
    }

    /// Hero image URL, if configured.
    #[must_use]
    pub fn hero_image(&self) -> Option<&str> {
        self.hero_image.as_deref()
    }
}

impl Default for HomeViewModel {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURED_LIMIT)
    }
}
