//! Command-line shop listing.

use std::sync::{Arc, Mutex};

use atelier::catalog::{CatalogLoader, CatalogViewModel, SharedCatalog, worker};
use atelier::settings::Settings;
use atelier::sources::{ArtworkQuery, StorefrontApi};
use atelier::state::{PriceRange, SortOption};

use crate::args::locale::Session;

/// What: Load the shop listing and print it with the requested sort and range.
///
/// Inputs:
/// - `settings`: Effective settings (API base URL, timeout)
/// - `session`: Resolved locale session
/// - `sort`: Client-side sort option
/// - `range`: Client-side price filter
///
/// Output:
/// - `false` when the client cannot be built or the load fails.
///
/// Details:
/// - Fetches `inStock=true` artworks on a background task, then renders the derived list.
pub async fn handle_shop(
    settings: &Settings,
    session: &Session,
    sort: SortOption,
    range: PriceRange,
) -> bool {
    tracing::info!(sort = %sort, min = range.min(), max = range.max(), "Shop requested from CLI");
    let api = match StorefrontApi::new(&settings.api_base_url, settings.request_timeout) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "Failed to build HTTP client");
            return false;
        }
    };

    let catalog: SharedCatalog = Arc::new(Mutex::new(CatalogViewModel::new()));
    {
        let mut vm = worker::lock(&catalog);
        vm.subscribe(|event| tracing::debug!(event = ?event, "[CLI] catalog event"));
        vm.set_sort(sort);
        vm.set_price_range(range);
    }

    let mut loader = CatalogLoader::new(Arc::clone(&catalog), api);
    let applied = match loader.spawn_load(ArtworkQuery::SHOP).await {
        Ok(applied) => applied,
        Err(e) => {
            tracing::error!(error = %e, "Catalog load task failed");
            false
        }
    };

    let vm = worker::lock(&catalog);
    println!("{}", atelier::ui::render_shop(&vm, &session.translations));
    applied && vm.request().error().is_none()
}
