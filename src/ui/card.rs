//! Artwork card rendering.

use crate::i18n::Translations;
use crate::state::Artwork;
use crate::util::format_price;

/// What: Render one artwork as indented text lines.
///
/// Inputs:
/// - `artwork`: Artwork to show
/// - `tr`: Active translations
///
/// Output:
/// - Lines: title, `medium, year`, price, image, detail link, purchase link.
///
/// Details:
/// - Uses the primary image; alt text falls back to the title when absent.
#[must_use]
pub fn render_card(artwork: &Artwork, tr: &Translations) -> Vec<String> {
    let image = artwork.primary_image().map_or_else(
        || tr.t("shop.no_image"),
        |img| {
            let alt = img.alt.as_deref().unwrap_or(&artwork.title);
            format!("{} ({alt})", img.url)
        },
    );
    vec![
        artwork.title.clone(),
        format!("  {}, {}", artwork.medium, artwork.year),
        format!("  {}", format_price(artwork.price)),
        format!("  {image}"),
        format!("  {}: {}", tr.t("shop.view_details"), artwork.detail_path()),
        format!("  {}: {}", tr.t("shop.purchase"), artwork.checkout_path()),
    ]
}
