//! Background catalog loads for view-models shared across tasks.
//!
//! Each spawned load takes a fresh ticket before the task starts and aborts
//! the previous task, so only the latest request can ever update the held
//! artworks. The catalog lock is never held across an await.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::{AbortHandle, JoinHandle};

use crate::catalog::view_model::CatalogViewModel;
use crate::sources::{ArtworkQuery, ArtworkSource};

/// Catalog view-model shared between the view and its loader tasks.
pub type SharedCatalog = Arc<Mutex<CatalogViewModel>>;

/// Lock the shared catalog, recovering the data if a holder panicked.
pub fn lock(catalog: &SharedCatalog) -> MutexGuard<'_, CatalogViewModel> {
    catalog.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Spawns catalog loads on the tokio runtime, one in flight at a time.
pub struct CatalogLoader<S> {
    /// View-model updated by the loads.
    catalog: SharedCatalog,
    /// Source the loads read from.
    source: Arc<S>,
    /// Abort handle of the most recently spawned load.
    in_flight: Option<AbortHandle>,
}

impl<S: ArtworkSource + 'static> CatalogLoader<S> {
    /// What: Create a loader for `catalog` reading from `source`.
    #[must_use]
    pub const fn new(catalog: SharedCatalog, source: Arc<S>) -> Self {
        Self {
            catalog,
            source,
            in_flight: None,
        }
    }

    /// Shared view-model handle.
    #[must_use]
    pub const fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// What: Spawn a load for `query`, superseding any load still in flight.
    ///
    /// Inputs:
    /// - `query`: Server-side filters
    ///
    /// Output:
    /// - `JoinHandle<bool>` resolving to whether the result was applied.
    ///
    /// Details:
    /// - The previous task is aborted; should it finish anyway its stale ticket is discarded.
    /// - Must be called from within a tokio runtime.
    pub fn spawn_load(&mut self, query: ArtworkQuery) -> JoinHandle<bool> {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        let ticket = lock(&self.catalog).begin_load();
        let catalog = Arc::clone(&self.catalog);
        let source = Arc::clone(&self.source);
        let handle = tokio::spawn(async move {
            let result = source.fetch_artworks(query).await;
            lock(&catalog).finish_load(ticket, result)
        });
        self.in_flight = Some(handle.abort_handle());
        handle
    }

    /// What: Abort the in-flight load and mark it cancelled.
    ///
    /// Output:
    /// - `true` if a request was in flight.
    pub fn cancel(&mut self) -> bool {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        lock(&self.catalog).cancel()
    }
}
