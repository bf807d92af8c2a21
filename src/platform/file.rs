//! File-backed platform used by the command-line front end.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::Platform;
use crate::error::EnvironmentUnavailable;

/// [`Platform`] storing preferences in a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FilePlatform {
    /// `preferences.json` location; `None` when no config directory exists.
    path: Option<PathBuf>,
    /// Language tag detected from the environment.
    language_tag: Option<String>,
}

impl FilePlatform {
    /// What: Platform for the current user.
    ///
    /// Output:
    /// - Store under the config directory (if any) and the language from `LC_ALL`/`LC_MESSAGES`/`LANG`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path: crate::settings::preferences_path(),
            language_tag: crate::locale::detect_environment_language(),
        }
    }

    /// Platform storing preferences at `path` with an explicit language tag.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>, language_tag: Option<&str>) -> Self {
        Self {
            path: Some(path.into()),
            language_tag: language_tag.map(ToString::to_string),
        }
    }

    /// Store location, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// What: Read the stored JSON object.
    ///
    /// Output:
    /// - The object, or an empty map when the file is missing or not a JSON object.
    fn read_map(path: &Path) -> Map<String, Value> {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(path = %path.display(), "[Prefs] preference file is not a JSON object; ignoring");
                Map::new()
            }
        }
    }
}

impl Platform for FilePlatform {
    fn has_persistent_store(&self) -> bool {
        self.path
            .as_deref()
            .is_some_and(crate::settings::paths::parent_exists)
    }

    fn read_preference(&self, key: &str) -> Option<String> {
        let path = self.path.as_deref()?;
        Self::read_map(path)
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), EnvironmentUnavailable> {
        if !self.has_persistent_store() {
            return Err(EnvironmentUnavailable::STORE);
        }
        let path = self.path.as_deref().ok_or(EnvironmentUnavailable::STORE)?;
        let mut map = Self::read_map(path);
        map.insert(key.to_string(), Value::String(value.to_string()));
        let body = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
            tracing::warn!(error = %e, "[Prefs] failed to serialize preferences");
            EnvironmentUnavailable::STORE
        })?;
        match std::fs::write(path, body) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), key, value, "[Prefs] preference persisted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Prefs] failed to write preferences");
                Err(EnvironmentUnavailable::STORE)
            }
        }
    }

    fn current_language_tag(&self) -> Option<String> {
        self.language_tag.clone()
    }
}
