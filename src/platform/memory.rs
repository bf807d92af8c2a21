//! In-memory platform and router.

use std::collections::HashMap;

use super::{Platform, Router};
use crate::error::EnvironmentUnavailable;

/// [`Platform`] backed by a `HashMap`, or by nothing in headless mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    /// Key-value store; `None` models a context without persistence.
    store: Option<HashMap<String, String>>,
    /// Reported language tag.
    language_tag: Option<String>,
}

impl MemoryPlatform {
    /// Platform with an empty store and no reported language.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Some(HashMap::new()),
            language_tag: None,
        }
    }

    /// Platform with no persistent store (e.g. a non-interactive context).
    #[must_use]
    pub fn headless() -> Self {
        Self {
            store: None,
            language_tag: None,
        }
    }

    /// Set the reported language tag.
    #[must_use]
    pub fn with_language_tag(mut self, tag: &str) -> Self {
        self.language_tag = Some(tag.to_string());
        self
    }

    /// Pre-populate a stored preference (no-op in headless mode).
    #[must_use]
    pub fn with_preference(mut self, key: &str, value: &str) -> Self {
        if let Some(store) = self.store.as_mut() {
            store.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Current stored value for `key`.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.store.as_ref()?.get(key).map(String::as_str)
    }
}

impl Platform for MemoryPlatform {
    fn has_persistent_store(&self) -> bool {
        self.store.is_some()
    }

    fn read_preference(&self, key: &str) -> Option<String> {
        self.stored(key).map(ToString::to_string)
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), EnvironmentUnavailable> {
        let store = self.store.as_mut().ok_or(EnvironmentUnavailable::STORE)?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn current_language_tag(&self) -> Option<String> {
        self.language_tag.clone()
    }
}

/// [`Router`] holding the current path and recording every navigation.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    /// Current route.
    path: String,
    /// Navigations requested, oldest first.
    history: Vec<String>,
}

impl MemoryRouter {
    /// Router positioned at `path`.
    #[must_use]
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            history: Vec::new(),
        }
    }

    /// Navigations requested so far.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Most recent navigation, if any.
    #[must_use]
    pub fn last_navigation(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&mut self, path: &str) {
        self.path = path.to_string();
        self.history.push(path.to_string());
    }
}
