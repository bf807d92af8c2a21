//! Locale prefix rewriting for route paths.

use crate::state::Locale;

/// Split `path` into the route and its `?query`/`#fragment` suffix.
fn split_suffix(path: &str) -> (&str, &str) {
    let at = path.find(['?', '#']).unwrap_or(path.len());
    path.split_at(at)
}

/// What: Return the first `/`-delimited segment of a route, if non-empty.
///
/// Inputs:
/// - `path`: Route such as `"/en/shop?x=1"`
///
/// Output:
/// - `Some("en")`; `None` for `"/"`, `""` or `"//x"`.
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    let (route, _) = split_suffix(path);
    let trimmed = route.strip_prefix('/').unwrap_or(route);
    let seg = trimmed.split('/').next().unwrap_or_default();
    (!seg.is_empty()).then_some(seg)
}

/// What: Replace the leading path segment with the locale code.
///
/// Inputs:
/// - `path`: Current route, e.g. `"/en/shop?sort=newest"`
/// - `locale`: Target locale
///
/// Output:
/// - Rewritten route, e.g. `"/bg/shop?sort=newest"`.
///
/// Details:
/// - All later segments, the query string and the fragment are preserved
/// - Only a leading `/segment` is replaced; a route without one (`"/"`, `""`, `"//x"`,
///   `"shop"`) is returned unchanged
#[must_use]
pub fn rewrite_locale_path(path: &str, locale: Locale) -> String {
    let (route, suffix) = split_suffix(path);
    let Some(trimmed) = route.strip_prefix('/') else {
        return path.to_string();
    };
    let end = trimmed.find('/').unwrap_or(trimmed.len());
    if end == 0 {
        return path.to_string();
    }
    format!("/{}{}{suffix}", locale.code(), &trimmed[end..])
}
