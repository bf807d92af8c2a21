//! Locale preference persisted through the file-backed platform.
//!
//! Tests cover:
//! - First run detection written to disk and reused by the next run
//! - Corrupt and unsupported stored values
//! - Missing store directory

use atelier::locale::{LANGUAGE_STORAGE_KEY, LocaleResolver, ResolverState};
use atelier::platform::{FilePlatform, MemoryRouter, Platform};
use atelier::state::Locale;

#[test]
/// What: A detected locale survives into the next session
///
/// - Input: First run with tag "bg-BG"; second run with tag "en-US"
/// - Output: Both runs resolve to bg; the file holds `userLanguagePreference: "bg"`
fn detected_locale_persists_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("preferences.json");

    let mut platform = FilePlatform::at(&prefs, Some("bg-BG"));
    let mut router = MemoryRouter::at("/en/shop");
    let mut resolver = LocaleResolver::default();
    assert_eq!(
        resolver.activate(&mut platform, &mut router).as_deref(),
        Some("/bg/shop")
    );

    let raw = std::fs::read_to_string(&prefs).expect("prefs written");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json[LANGUAGE_STORAGE_KEY], "bg");

    let mut platform = FilePlatform::at(&prefs, Some("en-US"));
    let mut router = MemoryRouter::at("/en");
    let mut resolver = LocaleResolver::default();
    assert_eq!(resolver.activate(&mut platform, &mut router).as_deref(), Some("/bg"));
    assert_eq!(resolver.state(), ResolverState::Resolved(Locale::Bg));
}

#[test]
/// What: A corrupt preference file reads as empty and is replaced on write
fn corrupt_file_is_treated_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("preferences.json");
    std::fs::write(&prefs, "{ not json").expect("write");

    let mut platform = FilePlatform::at(&prefs, Some("de-DE"));
    assert_eq!(platform.read_preference(LANGUAGE_STORAGE_KEY), None);
    let mut router = MemoryRouter::at("/de/about");
    let mut resolver = LocaleResolver::new(Locale::Bg);
    assert_eq!(
        resolver.activate(&mut platform, &mut router).as_deref(),
        Some("/en/about")
    );
    assert_eq!(
        platform.read_preference(LANGUAGE_STORAGE_KEY).as_deref(),
        Some("en")
    );
}

#[test]
/// What: Other keys in the preference file are preserved on write
fn unrelated_preferences_are_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("preferences.json");
    std::fs::write(&prefs, r#"{"theme":"dark","userLanguagePreference":"fr"}"#).expect("write");

    let mut platform = FilePlatform::at(&prefs, None);
    let mut router = MemoryRouter::at("/fr");
    let mut resolver = LocaleResolver::default();
    assert_eq!(resolver.activate(&mut platform, &mut router).as_deref(), Some("/en"));

    let raw = std::fs::read_to_string(&prefs).expect("prefs");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json["theme"], "dark");
    assert_eq!(json[LANGUAGE_STORAGE_KEY], "en");
}

#[test]
/// What: A store whose directory does not exist behaves as headless
fn missing_directory_means_no_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("absent").join("preferences.json");
    let mut platform = FilePlatform::at(&prefs, Some("bg-BG"));
    assert!(!platform.has_persistent_store());

    let mut router = MemoryRouter::at("/en");
    let mut resolver = LocaleResolver::default();
    assert_eq!(resolver.activate(&mut platform, &mut router), None);
    assert_eq!(resolver.state(), ResolverState::Init);
    assert!(router.history().is_empty());
    assert!(!prefs.exists());
}
