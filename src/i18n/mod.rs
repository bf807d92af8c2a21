//! User-facing strings for the supported locales.
//!
//! # Locale Files
//!
//! Strings live in `config/locales/{code}.yml` and are bundled into the
//! binary. Each file has one top-level key (the locale code) with nested
//! sections flattened into dot-notation keys:
//!
//! ```yaml
//! bg:
//!   shop:
//!     title: "Магазин за изкуство"
//! ```
//!
//! becomes `shop.title`. Missing keys fall back to English, then to the key itself.
//!
//! # Usage
//!
//! ```rust
//! use atelier::i18n::Translations;
//! use atelier::state::Locale;
//!
//! let tr = Translations::for_locale(Locale::Bg);
//! assert_eq!(tr.t_fmt("shop.available", &[&2]), "2 налични творби");
//! ```

mod loader;
pub mod translations;

pub use loader::{load_bundled, parse_locale_yaml};
pub use translations::{TranslationMap, Translations};

use crate::state::{PriceRange, SortOption};

/// Translation key for a sort option label.
#[must_use]
pub const fn sort_key(option: SortOption) -> &'static str {
    match option {
        SortOption::Newest => "sort.newest",
        SortOption::Oldest => "sort.oldest",
        SortOption::PriceLow => "sort.price_low",
        SortOption::PriceHigh => "sort.price_high",
    }
}

/// What: Translation key for a price range label.
///
/// Output:
/// - Key of the matching preset, or `None` for a custom range.
#[must_use]
pub fn range_key(range: PriceRange) -> Option<&'static str> {
    let keys = ["range.all", "range.under_500", "range.from_500_to_1000", "range.over_1000"];
    PriceRange::PRESETS
        .iter()
        .position(|p| *p == range)
        .map(|i| keys[i])
}
