use crate::state::{Artwork, PriceRange, SortOption};

/// What: Keep only the artworks whose price lies inside `range`.
///
/// Inputs:
/// - `artworks`: Already-sorted list (consumed)
/// - `range`: Inclusive price bound
///
/// Output:
/// - The subset with `min <= price <= max`, in input order.
#[must_use]
pub fn filter_by_price(artworks: Vec<Artwork>, range: PriceRange) -> Vec<Artwork> {
    artworks
        .into_iter()
        .filter(|a| range.contains(a.price))
        .collect()
}

/// What: Derive the displayed shop listing from the held artworks.
///
/// Inputs:
/// - `artworks`: Held source list (never mutated)
/// - `sort`: Active sort option
/// - `range`: Active price range
///
/// Output:
/// - Fresh `Vec<Artwork>`: a sorted copy, then filtered by price.
///
/// Details:
/// - Sorting happens before filtering; both steps preserve relative order for ties.
#[must_use]
pub fn derive_listing(artworks: &[Artwork], sort: SortOption, range: PriceRange) -> Vec<Artwork> {
    let sorted = crate::logic::sort::sorted_copy(artworks, sort);
    filter_by_price(sorted, range)
}
