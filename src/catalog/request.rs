//! Explicit load request lifecycle for the catalog.

use crate::error::FetchError;

/// Monotonic identifier of one `load()` request.
pub type RequestId = u64;

/// State of the most recent catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadRequest {
    /// No request issued yet, or the last one was cancelled.
    #[default]
    Idle,
    /// Request `id` is awaiting the source.
    InFlight {
        /// Request identifier.
        id: RequestId,
    },
    /// Request `id` replaced the held artworks with `count` items.
    Succeeded {
        /// Request identifier.
        id: RequestId,
        /// Number of artworks received.
        count: usize,
    },
    /// Request `id` failed; held artworks were left unchanged.
    Failed {
        /// Request identifier.
        id: RequestId,
        /// Failure reported by the source.
        error: FetchError,
    },
}

impl LoadRequest {
    /// Whether a request is currently awaiting its result.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Identifier of the request this state refers to, if any.
    #[must_use]
    pub const fn id(&self) -> Option<RequestId> {
        match self {
            Self::Idle => None,
            Self::InFlight { id } | Self::Succeeded { id, .. } | Self::Failed { id, .. } => {
                Some(*id)
            }
        }
    }

    /// Last failure, if the most recent request failed.
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Proof of a started load; hand it back to `finish_load` with the result.
///
/// A ticket only applies while it is the latest one issued by its view-model;
/// older tickets are stale and their results are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    /// Request identifier carried by this ticket.
    id: RequestId,
}

impl LoadTicket {
    /// Create a ticket for request `id`.
    pub(crate) const fn new(id: RequestId) -> Self {
        Self { id }
    }

    /// Request identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }
}
