//! Value types and change-notification plumbing shared by the view-models.

pub mod notify;
pub mod types;

// Public re-exports to keep short paths working
pub use notify::{ChangeNotifier, SubscriptionId};
pub use types::{Artwork, ArtworkImage, Locale, PriceRange, SortOption};
