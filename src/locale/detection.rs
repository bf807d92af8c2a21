//! Language tag detection and primary-subtag extraction.

use std::env;

use crate::state::Locale;

/// What: Detect the environment's language tag from locale variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Option<String>` with a tag like `"bg-BG"`, or `None` if nothing usable is set.
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in order
/// - `bg_BG.UTF-8` becomes `bg-BG`; the POSIX `C`/`POSIX` locales are skipped
pub fn detect_environment_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|value| normalize_env_locale(&value))
}

/// What: Turn a POSIX locale string into a BCP 47-style tag.
///
/// Inputs:
/// - `raw`: Value such as `"bg_BG.UTF-8"`, `"en_US@euro"`, `"de"`
///
/// Output:
/// - `Some("bg-BG")` style tag, or `None` for empty/`C`/`POSIX` values.
fn normalize_env_locale(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let base = trimmed
        .split(['.', '@'])
        .next()
        .filter(|s| !s.is_empty())?;
    if base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// What: Extract the lower-cased primary language subtag.
///
/// Inputs:
/// - `tag`: Language tag such as `"bg-BG"`, `"EN_us"`, `"bg"`
///
/// Output:
/// - `"bg"`, `"en"`, ... (portion before the first `-` or `_`), trimmed and lower-cased.
#[must_use]
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// What: Pick the supported locale for an environment language tag.
///
/// Inputs:
/// - `tag`: Reported tag, if any
///
/// Output:
/// - The matching supported locale, or the default (`en`) when unsupported or absent.
#[must_use]
pub fn locale_for_tag(tag: Option<&str>) -> Locale {
    tag.map(primary_subtag)
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default()
}
