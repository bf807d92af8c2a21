//! User-driven locale switches and redirect paths.

use std::sync::{Arc, Mutex};

use atelier::i18n::Translations;
use atelier::locale::{LANGUAGE_STORAGE_KEY, LocaleChanged, LocaleResolver, rewrite_locale_path};
use atelier::platform::{MemoryPlatform, MemoryRouter};
use atelier::state::Locale;

#[test]
/// What: Switching persists, redirects and notifies listeners
fn set_locale_persists_and_notifies() {
    let seen: Arc<Mutex<Vec<LocaleChanged>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut platform = MemoryPlatform::new().with_language_tag("en-GB");
    let mut router = MemoryRouter::at("/en/artwork/sunrise?ref=home#top");
    let mut resolver = LocaleResolver::default();
    resolver.subscribe(move |c| sink.lock().expect("sink").push(c.clone()));
    resolver.activate(&mut platform, &mut router);

    let redirect = resolver.set_locale(Locale::Bg, &mut platform, &mut router);
    assert_eq!(redirect, "/bg/artwork/sunrise?ref=home#top");
    assert_eq!(platform.stored(LANGUAGE_STORAGE_KEY), Some("bg"));
    assert_eq!(
        router.history(),
        [
            "/en/artwork/sunrise?ref=home#top".to_string(),
            "/bg/artwork/sunrise?ref=home#top".to_string(),
        ]
    );
    let seen = seen.lock().expect("seen");
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].locale, Locale::Bg);
}

#[test]
/// What: Without a store a switch still applies but nothing is persisted
fn set_locale_without_store_only_skips_persistence() {
    let mut platform = MemoryPlatform::headless();
    let mut router = MemoryRouter::at("/en/shop");
    let mut resolver = LocaleResolver::default();
    let redirect = resolver.set_locale(Locale::Bg, &mut platform, &mut router);
    assert_eq!(redirect, "/bg/shop");
    assert_eq!(resolver.active(), Locale::Bg);
    assert_eq!(platform.stored(LANGUAGE_STORAGE_KEY), None);
}

#[test]
/// What: Routes without a leading segment are navigated to unchanged
fn segmentless_route_redirects_to_itself() {
    for path in ["/", "", "//x", "shop"] {
        let mut platform = MemoryPlatform::new();
        let mut router = MemoryRouter::at(path);
        let mut resolver = LocaleResolver::default();
        let redirect = resolver.set_locale(Locale::Bg, &mut platform, &mut router);
        assert_eq!(redirect, path);
        assert_eq!(resolver.active(), Locale::Bg);
        assert_eq!(router.last_navigation(), Some(path));
    }
}

#[test]
/// What: Redirect paths of segmented routes start with a supported locale segment
fn rewritten_paths_lead_with_locale() {
    for path in ["/en", "/bg/shop", "/shop", "/fr/shop?x=1"] {
        for locale in Locale::ALL {
            let out = rewrite_locale_path(path, locale);
            let first = out.trim_start_matches('/').split(['/', '?', '#']).next();
            assert_eq!(first, Some(locale.code()), "{path} -> {out}");
        }
    }
}

#[test]
/// What: Switched strings come from the new locale's table
fn translations_follow_the_active_locale() {
    let mut platform = MemoryPlatform::new();
    let mut router = MemoryRouter::at("/en/shop");
    let mut resolver = LocaleResolver::default();
    resolver.set_locale(Locale::Bg, &mut platform, &mut router);
    let tr = Translations::for_locale(resolver.active());
    assert_eq!(tr.t("shop.purchase"), "Купи");
}
