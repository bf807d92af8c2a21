//! Catalog view-model for the shop listing.
//!
//! # Overview
//!
//! - [`CatalogViewModel`] holds the fetched artworks plus sort/filter state and
//!   derives the displayed list on demand.
//! - Loads are explicit requests ([`LoadRequest`]) identified by monotonic ids;
//!   a result only applies while its [`LoadTicket`] is the latest one.
//! - [`CatalogLoader`] runs loads as tokio tasks against a [`SharedCatalog`],
//!   aborting superseded tasks.
//!
//! # Usage
//!
//! ```rust,no_run
//! use atelier::catalog::CatalogViewModel;
//! use atelier::sources::{ArtworkQuery, StorefrontApi};
//! use atelier::state::SortOption;
//!
//! # async fn demo() -> Result<(), atelier::error::FetchError> {
//! let api = StorefrontApi::new("http://localhost:3000", std::time::Duration::from_secs(15))?;
//! let mut shop = CatalogViewModel::new();
//! shop.load(&api, ArtworkQuery::SHOP).await;
//! shop.set_sort(SortOption::PriceLow);
//! for artwork in shop.derived_list() {
//!     println!("{} ${}", artwork.title, artwork.price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod request;
pub mod view_model;
pub mod worker;

pub use request::{LoadRequest, LoadTicket, RequestId};
pub use view_model::{CatalogEvent, CatalogViewModel};
pub use worker::{CatalogLoader, SharedCatalog};
