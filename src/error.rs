//! The two error kinds the storefront core knows about.
//!
//! Neither is fatal: view-models catch them, log them and degrade.

/// Failure of an external API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },
    /// The body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                status: status.as_u16(),
            }
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// A platform capability (persistent store, navigation) is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("environment unavailable: {capability}")]
pub struct EnvironmentUnavailable {
    /// Name of the missing capability, e.g. `"persistent store"`.
    pub capability: &'static str,
}

impl EnvironmentUnavailable {
    /// Missing persistent key-value store.
    pub const STORE: Self = Self {
        capability: "persistent store",
    };
}
