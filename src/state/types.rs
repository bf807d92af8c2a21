//! Core value types shared by the catalog and locale view-models.

use std::fmt;
use std::str::FromStr;

/// What: Deserialize a value, mapping JSON `null` to the type's default.
///
/// Details:
/// - Used on display fields so one `null` does not reject the whole record
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// One image attached to an artwork.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArtworkImage {
    /// Public URL of the image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Alternative text; absent for some uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A sellable artwork as returned by `GET /api/artwork`.
///
/// Read-only to this crate: it is decoded, sorted and filtered, never edited.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Unique identifier.
    pub id: String,
    /// URL-safe unique identifier used in detail links.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Display title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Medium (e.g. "Oil on canvas").
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium: String,
    /// Year of creation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    /// Asking price, never negative.
    pub price: f64,
    /// Ordered images; the first one is the primary image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ArtworkImage>,
    /// ISO 8601 creation timestamp, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Whether the artwork can still be purchased.
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_stock: bool,
    /// Whether the artwork is highlighted on the home page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl Artwork {
    /// What: Return the primary (first) image if the artwork has one.
    ///
    /// Output:
    /// - `Some(&ArtworkImage)` for the first image; `None` when `images` is empty.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ArtworkImage> {
        self.images.first()
    }

    /// What: Check the price invariant.
    ///
    /// Output:
    /// - `true` when `price` is finite and not negative.
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }

    /// Detail page link for this artwork.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/artwork/{}", self.slug)
    }

    /// Checkout link for this artwork.
    #[must_use]
    pub fn checkout_path(&self) -> String {
        format!("/checkout?artwork={}", self.id)
    }
}

/// Ordering applied to the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Most recently created first; undated works last.
    #[default]
    Newest,
    /// Oldest first; undated works first.
    Oldest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortOption {
    /// Every option in the order the sort selector lists them.
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::PriceLow, Self::PriceHigh];

    /// Wire/CLI token for this option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|opt| opt.as_str() == s.trim())
            .ok_or_else(|| {
                format!("unknown sort option '{s}' (expected newest, oldest, price-low or price-high)")
            })
    }
}

/// Inclusive price bound applied while deriving the shop listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lower bound (inclusive).
    min: f64,
    /// Upper bound (inclusive).
    max: f64,
}

impl PriceRange {
    /// "All" preset.
    pub const ALL: Self = Self { min: 0.0, max: 10_000.0 };
    /// "Under $500" preset.
    pub const UNDER_500: Self = Self { min: 0.0, max: 500.0 };
    /// "$500-$1000" preset.
    pub const FROM_500_TO_1000: Self = Self { min: 500.0, max: 1_000.0 };
    /// "$1000+" preset.
    pub const OVER_1000: Self = Self { min: 1_000.0, max: 10_000.0 };
    /// The four presets offered by the shop, in display order.
    pub const PRESETS: [Self; 4] = [
        Self::ALL,
        Self::UNDER_500,
        Self::FROM_500_TO_1000,
        Self::OVER_1000,
    ];

    /// What: Build a validated range.
    ///
    /// Inputs:
    /// - `min`, `max`: inclusive bounds
    ///
    /// Output:
    /// - `Some(PriceRange)` when both bounds are finite, non-negative and `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let valid = min.is_finite() && max.is_finite() && min >= 0.0 && min <= max;
        valid.then_some(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether `price` lies within the range, both ends included.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromStr for PriceRange {
    type Err = String;

    /// Parses `all`, `under-500`, `500-1000`, `1000+` or an explicit `MIN-MAX`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => return Ok(Self::ALL),
            "under-500" => return Ok(Self::UNDER_500),
            "1000+" => return Ok(Self::OVER_1000),
            _ => {}
        }
        let (lo, hi) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("invalid price range '{s}' (expected MIN-MAX)"))?;
        let min = lo
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid minimum price '{lo}': {e}"))?;
        let max = hi
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid maximum price '{hi}': {e}"))?;
        Self::new(min, max).ok_or_else(|| format!("invalid price range '{s}' (need 0 <= min <= max)"))
    }
}

/// UI language. The supported set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Bulgarian.
    Bg,
}

impl Locale {
    /// Supported locales in switcher order.
    pub const ALL: [Self; 2] = [Self::En, Self::Bg];

    /// Two-letter code used in paths and persisted preferences.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bg => "bg",
        }
    }

    /// Short label shown in the language switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Bg => "BG",
        }
    }

    /// What: Look up a supported locale by its exact code.
    ///
    /// Inputs:
    /// - `code`: candidate code such as `"bg"`
    ///
    /// Output:
    /// - `Some(Locale)` when `code` is a member of the supported set; `None` otherwise.
    ///
    /// Details:
    /// - Matching is exact: `"BG"` or `"bg-BG"` are not members.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_lowercase())
            .ok_or_else(|| format!("unsupported locale '{s}' (expected en or bg)"))
    }
}
