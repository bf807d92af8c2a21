use std::cmp::Ordering;

use crate::state::{Artwork, SortOption};

/// What: Convert an artwork's `createdAt` string into epoch milliseconds.
///
/// Inputs:
/// - `created_at`: Optional ISO 8601 timestamp
///
/// Output:
/// - Milliseconds since the Unix epoch; `0` when absent or unparseable.
///
/// Details:
/// - Accepts RFC 3339 (`2024-01-01T10:00:00Z`, offsets allowed)
/// - A bare date (`2024-01-01`) is midnight UTC
/// - A timestamp without offset (`2024-01-01T10:00:00.000`) is read as UTC, unlike a browser's
///   `Date` parser which reads it as local time; orderings only differ across offset boundaries
#[must_use]
pub fn created_at_millis(created_at: Option<&str>) -> i64 {
    let Some(raw) = created_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().timestamp_millis();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return midnight.and_utc().timestamp_millis();
    }
    tracing::debug!(created_at = raw, "unparseable createdAt; treating as epoch 0");
    0
}

/// What: Compare two artworks under a sort option.
///
/// Inputs:
/// - `option`: Active sort option
/// - `a`, `b`: Artworks to compare
///
/// Output:
/// - `Ordering` placing `a` relative to `b`; `Equal` for ties so a stable sort keeps fetch order.
#[must_use]
pub fn compare(option: SortOption, a: &Artwork, b: &Artwork) -> Ordering {
    match option {
        SortOption::PriceLow => a.price.total_cmp(&b.price),
        SortOption::PriceHigh => b.price.total_cmp(&a.price),
        SortOption::Newest => created_at_millis(b.created_at.as_deref())
            .cmp(&created_at_millis(a.created_at.as_deref())),
        SortOption::Oldest => created_at_millis(a.created_at.as_deref())
            .cmp(&created_at_millis(b.created_at.as_deref())),
    }
}

/// What: Return a sorted copy of `artworks`.
///
/// Inputs:
/// - `artworks`: Source list (left untouched)
/// - `option`: Sort option to apply
///
/// Output:
/// - New `Vec<Artwork>` ordered by `option`.
///
/// Details:
/// - Timestamps are parsed once per item, not once per comparison.
/// - `sort_by` is stable, so equal keys keep their original relative order.
#[must_use]
pub fn sorted_copy(artworks: &[Artwork], option: SortOption) -> Vec<Artwork> {
    match option {
        SortOption::PriceLow | SortOption::PriceHigh => {
            let mut out = artworks.to_vec();
            out.sort_by(|a, b| compare(option, a, b));
            out
        }
        SortOption::Newest | SortOption::Oldest => {
            let mut keyed: Vec<(i64, &Artwork)> = artworks
                .iter()
                .map(|a| (created_at_millis(a.created_at.as_deref()), a))
                .collect();
            if option == SortOption::Newest {
                keyed.sort_by(|(ka, _), (kb, _)| kb.cmp(ka));
            } else {
                keyed.sort_by(|(ka, _), (kb, _)| ka.cmp(kb));
            }
            keyed.into_iter().map(|(_, a)| a.clone()).collect()
        }
    }
}
