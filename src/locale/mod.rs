//! Locale resolution and switching.
//!
//! # Overview
//!
//! At startup [`LocaleResolver::activate`] picks the active language:
//! 1. The stored preference (key [`LANGUAGE_STORAGE_KEY`]) if it is a supported code
//! 2. Otherwise the environment's primary language subtag if supported, else `en`;
//!    this choice is persisted
//!
//! Either way the router is sent to the current path with its leading segment
//! replaced by the locale code (`/en/shop` -> `/bg/shop`). User changes go
//! through [`LocaleResolver::set_locale`], which persists and redirects the same way.
//!
//! # Error Handling
//!
//! - No persistent store: activation is skipped and the static default stays active
//! - Write failures are logged; the locale still changes for the session

mod detection;
mod path;
mod resolver;

pub use detection::{detect_environment_language, locale_for_tag, primary_subtag};
pub use path::{first_segment, rewrite_locale_path};
pub use resolver::{LANGUAGE_STORAGE_KEY, LocaleChanged, LocaleResolver, ResolverState};
