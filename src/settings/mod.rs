//! User settings (`settings.conf`) and config/log directory resolution.
//!
//! `settings.conf` is a plain `key = value` file; lines starting with `#`,
//! `//` or `;` are comments. Unknown keys are ignored, malformed values keep
//! their defaults.
//!
//! ```text
//! # Storefront API
//! api_base_url = https://shop.example.com
//! request_timeout_secs = 10
//! default_locale = bg
//! featured_limit = 3
//! ```

use std::path::Path;
use std::time::Duration;

use crate::state::Locale;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

pub mod paths;

pub use paths::{config_dir, logs_dir, preferences_path, settings_path};

/// Default API base URL (local development server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Effective settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Scheme and host of the storefront API.
    pub api_base_url: String,
    /// Locale used until the resolver runs (and when it cannot run).
    pub default_locale: Locale,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Featured works shown on the home page.
    pub featured_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_locale: Locale::En,
            request_timeout: Duration::from_secs(15),
            featured_limit: crate::home::DEFAULT_FEATURED_LIMIT,
        }
    }
}

/// What: Parse `settings.conf` content on top of the defaults.
///
/// Inputs:
/// - `content`: File content
///
/// Output:
/// - `Settings` with recognized keys applied.
///
/// Details:
/// - Keys are case-insensitive; `-` and `_` are interchangeable
/// - Invalid values log a warning and keep the default
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, value)) = parse_key_value(line) else {
            tracing::debug!(line, "ignoring settings line without '='");
            continue;
        };
        let norm = key.to_lowercase().replace('-', "_");
        match norm.as_str() {
            "api_base_url" => {
                if value.starts_with("http://") || value.starts_with("https://") {
                    settings.api_base_url = value.trim_end_matches('/').to_string();
                } else {
                    tracing::warn!(value = %value, "api_base_url must start with http:// or https://");
                }
            }
            "default_locale" | "locale" => match value.parse::<Locale>() {
                Ok(locale) => settings.default_locale = locale,
                Err(e) => tracing::warn!(error = %e, "invalid default_locale in settings.conf"),
            },
            "request_timeout_secs" => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => settings.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %value, "invalid request_timeout_secs in settings.conf"),
            },
            "featured_limit" => match value.parse::<usize>() {
                Ok(n) => settings.featured_limit = n,
                Err(e) => tracing::warn!(error = %e, "invalid featured_limit in settings.conf"),
            },
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    settings
}

/// What: Load settings from `path`, falling back to defaults.
///
/// Inputs:
/// - `path`: Location of `settings.conf`
///
/// Output:
/// - Parsed settings, or defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no settings file; using defaults");
            Settings::default()
        }
    }
}

/// Load settings from the default `settings.conf` location.
#[must_use]
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
