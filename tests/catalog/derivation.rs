//! Sort and price-filter laws of the derived listing.
//!
//! Tests cover:
//! - Output is a subset of the held artworks, exactly those inside the range
//! - Derivation is idempotent and does not mutate the held list
//! - Ordering per sort option, stable on ties
//! - Reset equivalence

use atelier::catalog::CatalogViewModel;
use atelier::logic::derive_listing;
use atelier::state::{Artwork, PriceRange, SortOption};

/// What: Minimal artwork for listing tests.
fn artwork(id: &str, price: f64, created_at: Option<&str>) -> Artwork {
    Artwork {
        id: id.to_string(),
        slug: format!("{id}-slug"),
        title: format!("Artwork {id}"),
        medium: "Watercolor".to_string(),
        year: 2022,
        price,
        images: Vec::new(),
        created_at: created_at.map(ToString::to_string),
        in_stock: true,
        featured: false,
    }
}

/// What: A mixed fixture with ties, missing dates and boundary prices.
fn fixture() -> Vec<Artwork> {
    vec![
        artwork("a", 500.0, Some("2024-05-01T00:00:00Z")),
        artwork("b", 0.0, None),
        artwork("c", 1000.0, Some("2023-01-01")),
        artwork("d", 500.0, Some("2024-05-01T00:00:00Z")),
        artwork("e", 9999.5, Some("not a date")),
        artwork("f", 1000.01, Some("2025-02-02T12:00:00+02:00")),
    ]
}

fn ids(list: &[Artwork]) -> Vec<&str> {
    list.iter().map(|a| a.id.as_str()).collect()
}

#[test]
/// What: Every sort and preset yields exactly the in-range artworks
fn derived_list_is_exact_range_subset() {
    let items = fixture();
    for sort in SortOption::ALL {
        for range in PriceRange::PRESETS {
            let out = derive_listing(&items, sort, range);
            let mut got: Vec<&str> = ids(&out);
            got.sort_unstable();
            let mut want: Vec<&str> = items
                .iter()
                .filter(|a| a.price >= range.min() && a.price <= range.max())
                .map(|a| a.id.as_str())
                .collect();
            want.sort_unstable();
            assert_eq!(got, want, "sort={sort} range={range:?}");
        }
    }
}

#[test]
/// What: Deriving twice gives the same list and leaves the input untouched
fn derivation_is_idempotent_and_pure() {
    let items = fixture();
    let before = ids(&items).join(",");
    for sort in SortOption::ALL {
        let first = derive_listing(&items, sort, PriceRange::ALL);
        let second = derive_listing(&items, sort, PriceRange::ALL);
        assert_eq!(ids(&first), ids(&second));
    }
    assert_eq!(ids(&items).join(","), before);
}

#[test]
/// What: Inclusive bounds keep 500 and 1000 in the middle preset
fn middle_preset_bounds_are_inclusive() {
    let out = derive_listing(&fixture(), SortOption::PriceLow, PriceRange::FROM_500_TO_1000);
    assert_eq!(ids(&out), ["a", "d", "c"]);
}

#[test]
/// What: Price sorts order by price with ties kept in fetch order
fn price_sorts_are_stable() {
    let items = fixture();
    let low = derive_listing(&items, SortOption::PriceLow, PriceRange::ALL);
    assert_eq!(ids(&low), ["b", "a", "d", "c", "f", "e"]);
    let high = derive_listing(&items, SortOption::PriceHigh, PriceRange::ALL);
    assert_eq!(ids(&high), ["e", "f", "c", "a", "d", "b"]);
}

#[test]
/// What: Date sorts treat missing or unparseable dates as the epoch
fn date_sorts_put_undated_at_the_far_end() {
    let items = fixture();
    let newest = derive_listing(&items, SortOption::Newest, PriceRange::ALL);
    assert_eq!(ids(&newest), ["f", "a", "d", "c", "b", "e"]);
    let oldest = derive_listing(&items, SortOption::Oldest, PriceRange::ALL);
    assert_eq!(ids(&oldest), ["b", "e", "c", "a", "d", "f"]);
}

#[test]
/// What: After reset the view derives the default newest/all listing
fn reset_matches_defaults() {
    let mut vm = CatalogViewModel::new();
    vm.set_sort(SortOption::PriceLow);
    vm.set_price_range(PriceRange::OVER_1000);
    vm.reset();
    assert_eq!(vm.sort(), SortOption::Newest);
    assert_eq!(vm.price_range(), PriceRange::ALL);
    assert_eq!(
        ids(&vm.derived_list()),
        ids(&derive_listing(vm.artworks(), SortOption::Newest, PriceRange::ALL))
    );
}
