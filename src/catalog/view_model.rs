//! Shop listing view-model: held artworks, sort/filter state and load lifecycle.

use crate::catalog::request::{LoadRequest, LoadTicket, RequestId};
use crate::error::FetchError;
use crate::sources::{ArtworkQuery, ArtworkSource};
use crate::state::{Artwork, ChangeNotifier, PriceRange, SortOption, SubscriptionId};

/// Change notifications emitted by [`CatalogViewModel`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The loading flag flipped.
    LoadingChanged(bool),
    /// A load succeeded and the held set now has `count` artworks.
    ArtworksReplaced {
        /// Number of artworks held after the replacement.
        count: usize,
    },
    /// A load failed; the held set is unchanged.
    LoadFailed {
        /// Human-readable failure.
        message: String,
    },
    /// The sort option changed.
    SortChanged(SortOption),
    /// The price range changed.
    PriceRangeChanged(PriceRange),
}

/// View-model behind the shop listing.
///
/// The held artwork list is only ever replaced wholesale by a successful,
/// non-superseded load. Everything the view displays comes from
/// [`CatalogViewModel::derived_list`].
#[derive(Debug)]
pub struct CatalogViewModel {
    /// Artworks from the latest successful load, in fetch order.
    artworks: Vec<Artwork>,
    /// Active sort option.
    sort: SortOption,
    /// Active price filter.
    price_range: PriceRange,
    /// Lifecycle of the latest load request.
    request: LoadRequest,
    /// Next request id to hand out.
    next_request_id: RequestId,
    /// Listeners for state changes.
    notifier: ChangeNotifier<CatalogEvent>,
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogViewModel {
    /// Empty view-model with `newest` sorting and the "All" price range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            artworks: Vec::new(),
            sort: SortOption::default(),
            price_range: PriceRange::default(),
            request: LoadRequest::Idle,
            next_request_id: 1,
            notifier: ChangeNotifier::default(),
        }
    }

    /// What: Fetch artworks from `source` and replace the held set on success.
    ///
    /// Inputs:
    /// - `source`: Artwork source (HTTP API or a fake)
    /// - `query`: Server-side filters, e.g. [`ArtworkQuery::SHOP`]
    ///
    /// Output:
    /// - `true` when the result was applied (success or failure recorded); `false` if superseded.
    ///
    /// Details:
    /// - Loading is `true` while the source is awaited and `false` afterwards, whatever the outcome.
    /// - Failures are logged and leave the held artworks untouched; no retry.
    pub async fn load<S: ArtworkSource>(&mut self, source: &S, query: ArtworkQuery) -> bool {
        let ticket = self.begin_load();
        let result = source.fetch_artworks(query).await;
        self.finish_load(ticket, result)
    }

    /// What: Start a new load request.
    ///
    /// Output:
    /// - `LoadTicket` identifying the request; any older in-flight request becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        let id = self.next_request_id;
        self.next_request_id += 1;
        let was_loading = self.request.is_in_flight();
        if let LoadRequest::InFlight { id: previous } = self.request {
            tracing::debug!(previous, superseded_by = id, "[Catalog] superseding in-flight load");
        }
        self.request = LoadRequest::InFlight { id };
        tracing::debug!(id, "[Catalog] load started");
        if !was_loading {
            self.notifier.notify(&CatalogEvent::LoadingChanged(true));
        }
        LoadTicket::new(id)
    }

    /// What: Apply the outcome of a load started with [`Self::begin_load`].
    ///
    /// Inputs:
    /// - `ticket`: Ticket returned by `begin_load`
    /// - `result`: Artworks or the fetch failure
    ///
    /// Output:
    /// - `true` if applied; `false` if the ticket was superseded or cancelled (result discarded).
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Artwork>, FetchError>,
    ) -> bool {
        let id = ticket.id();
        if !matches!(self.request, LoadRequest::InFlight { id: current } if current == id) {
            tracing::debug!(id, latest = ?self.request.id(), "[Catalog] discarding stale load result");
            return false;
        }
        match result {
            Ok(artworks) => {
                let count = artworks.len();
                self.artworks = artworks;
                self.request = LoadRequest::Succeeded { id, count };
                tracing::info!(id, count, "[Catalog] artworks loaded");
                self.notifier.notify(&CatalogEvent::ArtworksReplaced { count });
            }
            Err(error) => {
                tracing::warn!(id, error = %error, "[Catalog] error fetching artworks");
                let message = error.to_string();
                self.request = LoadRequest::Failed { id, error };
                self.notifier.notify(&CatalogEvent::LoadFailed { message });
            }
        }
        self.notifier.notify(&CatalogEvent::LoadingChanged(false));
        true
    }

    /// What: Cancel the in-flight load, if any.
    ///
    /// Output:
    /// - `true` if a request was cancelled; its eventual result will be discarded.
    pub fn cancel(&mut self) -> bool {
        let LoadRequest::InFlight { id } = self.request else {
            return false;
        };
        tracing::debug!(id, "[Catalog] load cancelled");
        self.request = LoadRequest::Idle;
        self.notifier.notify(&CatalogEvent::LoadingChanged(false));
        true
    }

    /// Change the sort option; takes effect on the next derivation.
    pub fn set_sort(&mut self, option: SortOption) {
        if self.sort != option {
            self.sort = option;
            self.notifier.notify(&CatalogEvent::SortChanged(option));
        }
    }

    /// Change the price filter; takes effect on the next derivation.
    pub fn set_price_range(&mut self, range: PriceRange) {
        if self.price_range != range {
            self.price_range = range;
            self.notifier.notify(&CatalogEvent::PriceRangeChanged(range));
        }
    }

    /// Restore `newest` sorting and the "All" price range.
    pub fn reset(&mut self) {
        self.set_sort(SortOption::Newest);
        self.set_price_range(PriceRange::ALL);
    }

    /// What: Compute the displayed listing.
    ///
    /// Output:
    /// - Fresh list: held artworks sorted by the active option, then filtered by the active range.
    ///
    /// Details:
    /// - Never mutates the held artworks; calling it twice without state changes yields the same list.
    #[must_use]
    pub fn derived_list(&self) -> Vec<Artwork> {
        crate::logic::derive_listing(&self.artworks, self.sort, self.price_range)
    }

    /// Held artworks in fetch order.
    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Active sort option.
    #[must_use]
    pub const fn sort(&self) -> SortOption {
        self.sort
    }

    /// Active price range.
    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Latest load request state.
    #[must_use]
    pub const fn request(&self) -> &LoadRequest {
        &self.request
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.request.is_in_flight()
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CatalogEvent) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
