//! Pure listing logic: sort comparators and price filtering.

pub mod filter;
pub mod sort;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use filter::{derive_listing, filter_by_price};
pub use sort::{compare, created_at_millis, sorted_copy};
