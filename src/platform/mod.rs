//! Platform capabilities consumed by the locale resolver.
//!
//! The resolver never touches the environment directly. It receives a
//! [`Platform`] for the persisted preference and the reported language, and a
//! [`Router`] for the current route and navigation requests.
//!
//! - [`FilePlatform`]: preferences in a JSON file under the config directory,
//!   language from the `LC_ALL`/`LC_MESSAGES`/`LANG` environment variables.
//! - [`MemoryPlatform`]: in-memory store for tests and embedding; can model a
//!   headless context with no store at all.

use crate::error::EnvironmentUnavailable;

pub mod file;
pub mod memory;

pub use file::FilePlatform;
pub use memory::{MemoryPlatform, MemoryRouter};

/// Access to the durable client-side key-value store and environment language.
pub trait Platform {
    /// Whether a durable key-value store is available at all.
    fn has_persistent_store(&self) -> bool;

    /// Read a stored preference; `None` when absent or the store is unavailable.
    fn read_preference(&self, key: &str) -> Option<String>;

    /// What: Persist `value` under `key`.
    ///
    /// # Errors
    /// - Returns `EnvironmentUnavailable` when the store is missing or cannot be written
    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), EnvironmentUnavailable>;

    /// Language tag reported by the environment, e.g. `"bg-BG"`.
    fn current_language_tag(&self) -> Option<String>;
}

/// Routing surface: read the current path, request navigation.
pub trait Router {
    /// Current route path, possibly with query string.
    fn current_path(&self) -> String;

    /// Request navigation to `path`.
    fn navigate(&mut self, path: &str);
}
