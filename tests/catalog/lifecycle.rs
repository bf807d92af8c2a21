//! Load lifecycle: last request wins, failures keep data, notifications.

use std::sync::{Arc, Mutex};

use atelier::catalog::{CatalogEvent, CatalogViewModel, LoadRequest};
use atelier::error::FetchError;
use atelier::state::{Artwork, PriceRange, SortOption};

fn artwork(id: &str, price: f64) -> Artwork {
    Artwork {
        id: id.to_string(),
        slug: id.to_string(),
        title: id.to_string(),
        medium: "Ink".to_string(),
        year: 2021,
        price,
        images: Vec::new(),
        created_at: None,
        in_stock: true,
        featured: false,
    }
}

#[test]
/// What: A result arriving after a newer request started is discarded
///
/// - Input: Two tickets; the older one completes last
/// - Output: Only the newer result is held
fn out_of_order_results_keep_latest() {
    let mut vm = CatalogViewModel::new();
    let first = vm.begin_load();
    let second = vm.begin_load();
    assert!(second.id() > first.id());

    assert!(vm.finish_load(second, Ok(vec![artwork("new", 1.0)])));
    assert!(!vm.finish_load(first, Ok(vec![artwork("old", 1.0)])));
    assert_eq!(vm.artworks().len(), 1);
    assert_eq!(vm.artworks()[0].id, "new");
    assert!(!vm.is_loading());
}

#[test]
/// What: Failure keeps prior data, records the error and clears loading
fn failure_keeps_previous_artworks() {
    let mut vm = CatalogViewModel::new();
    let t = vm.begin_load();
    vm.finish_load(t, Ok(vec![artwork("a", 1.0), artwork("b", 2.0)]));

    let t = vm.begin_load();
    assert!(vm.is_loading());
    vm.finish_load(t, Err(FetchError::Network("offline".to_string())));
    assert_eq!(vm.artworks().len(), 2);
    assert!(matches!(vm.request(), LoadRequest::Failed { .. }));
    assert!(!vm.is_loading());
}

#[test]
/// What: Cancelled loads never apply
fn cancelled_load_is_discarded() {
    let mut vm = CatalogViewModel::new();
    let t = vm.begin_load();
    assert!(vm.cancel());
    assert!(!vm.cancel());
    assert!(!vm.finish_load(t, Ok(vec![artwork("late", 1.0)])));
    assert!(vm.artworks().is_empty());
    assert_eq!(vm.request(), &LoadRequest::Idle);
}

#[test]
/// What: Listeners see changes only, and stop after unsubscribing
fn listeners_receive_changes_only() {
    let seen: Arc<Mutex<Vec<CatalogEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut vm = CatalogViewModel::new();
    let id = vm.subscribe(move |e| sink.lock().expect("sink").push(e.clone()));

    vm.set_sort(SortOption::Newest);
    vm.set_sort(SortOption::Oldest);
    vm.set_price_range(PriceRange::ALL);
    vm.set_price_range(PriceRange::UNDER_500);
    assert_eq!(
        *seen.lock().expect("seen"),
        [
            CatalogEvent::SortChanged(SortOption::Oldest),
            CatalogEvent::PriceRangeChanged(PriceRange::UNDER_500),
        ]
    );

    assert!(vm.unsubscribe(id));
    vm.set_sort(SortOption::PriceLow);
    assert_eq!(seen.lock().expect("seen").len(), 2);
}
