//! Plain-text views of the storefront pages.
//!
//! Every renderer is a pure function of a view-model and the active
//! [`Translations`], returning the text the CLI prints.

mod card;

pub use card::render_card;

use crate::catalog::CatalogViewModel;
use crate::home::HomeViewModel;
use crate::i18n::{Translations, range_key, sort_key};
use crate::state::{Locale, PriceRange};
use crate::util::format_price;

/// What: Label for a price range: the preset label, or `$min-$max` for a custom range.
#[must_use]
pub fn range_label(range: PriceRange, tr: &Translations) -> String {
    range_key(range).map_or_else(
        || format!("{}-{}", format_price(range.min()), format_price(range.max())),
        |key| tr.t(key),
    )
}

/// What: Render the shop page for the current catalog state.
///
/// Inputs:
/// - `catalog`: Catalog view-model (listing, sort, range, request state)
/// - `tr`: Active translations
///
/// Output:
/// - Header with the active sort and range, then the derived listing or the empty message.
///
/// Details:
/// - While a load is in flight the loading line is shown above whatever data is held.
/// - A failed load shows its error; the previously loaded listing stays visible.
#[must_use]
pub fn render_shop(catalog: &CatalogViewModel, tr: &Translations) -> String {
    let mut out = vec![
        tr.t("shop.title"),
        tr.t("shop.subtitle"),
        String::new(),
        format!("{}: {}", tr.t("shop.sort_label"), tr.t(sort_key(catalog.sort()))),
        format!(
            "{}: {}",
            tr.t("shop.range_label"),
            range_label(catalog.price_range(), tr)
        ),
        String::new(),
    ];
    if catalog.is_loading() {
        out.push(tr.t("shop.loading"));
    }
    if let Some(err) = catalog.request().error() {
        out.push(format!("! {err}"));
    }

    let listing = catalog.derived_list();
    if listing.is_empty() {
        out.push(tr.t("shop.empty"));
        out.push(tr.t("shop.reset_hint"));
    } else {
        out.push(tr.t_fmt("shop.available", &[&listing.len()]));
        for artwork in &listing {
            out.push(String::new());
            out.extend(render_card(artwork, tr));
        }
    }

    out.push(String::new());
    out.push(tr.t("shop.commission_title"));
    out.push(tr.t("shop.commission_body"));
    out.join("\n")
}

/// What: Render the home page.
///
/// Output:
/// - Title, hero line, then the featured works as cards.
#[must_use]
pub fn render_home(home: &HomeViewModel, tr: &Translations) -> String {
    let mut out = vec![tr.t("home.title"), tr.t("home.subtitle")];
    out.push(home.hero_image().map_or_else(
        || tr.t("home.hero_none"),
        |url| tr.t_fmt("home.hero", &[&url]),
    ));
    out.push(format!("{}: /gallery", tr.t("home.view_gallery")));
    out.push(String::new());
    out.push(tr.t("home.featured_works"));
    for artwork in home.featured() {
        out.push(String::new());
        out.extend(render_card(artwork, tr));
    }
    out.push(String::new());
    out.push(format!("{}: /gallery", tr.t("home.view_all")));
    out.join("\n")
}

/// What: Render the language switcher options.
///
/// Output:
/// - One line per supported locale (`EN`, `BG`), the active one marked with `*`.
#[must_use]
pub fn render_language_switcher(active: Locale, tr: &Translations) -> String {
    let mut out = vec![tr.t_fmt("locale.current", &[&active.label()])];
    for locale in Locale::ALL {
        let marker = if locale == active { '*' } else { ' ' };
        out.push(format!("{marker} {} ({})", locale.label(), locale.code()));
    }
    out.join("\n")
}
