//! Small formatting helpers shared by the binary and the text views.

pub mod config;

/// What: Format a Unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Inputs:
/// - `ts`: Optional seconds since the epoch
///
/// Output:
/// - Formatted string; empty for `None`, the raw number if out of range.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0).map_or_else(
        || t.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// What: Render a price the way the shop shows it.
///
/// Inputs:
/// - `price`: Amount in dollars
///
/// Output:
/// - `"$450"` for whole amounts, `"$450.5"` otherwise.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price.fract().abs() < f64::EPSILON {
        format!("${price:.0}")
    } else {
        format!("${price}")
    }
}
