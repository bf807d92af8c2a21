//! Command-line language resolution and switching.

use atelier::i18n::Translations;
use atelier::locale::{LocaleResolver, ResolverState};
use atelier::platform::{FilePlatform, MemoryRouter, Platform};
use atelier::settings::Settings;
use atelier::state::Locale;

/// Locale state shared by every command of one invocation.
pub struct Session {
    /// Preference file and environment language.
    pub platform: FilePlatform,
    /// Current route given by `--path`; records redirects.
    pub router: MemoryRouter,
    /// Active locale resolver.
    pub resolver: LocaleResolver,
    /// Strings for the active locale.
    pub translations: Translations,
}

impl Session {
    /// What: Resolve the startup locale for this invocation.
    ///
    /// Inputs:
    /// - `settings`: Effective settings (static default locale)
    /// - `path`: Current route
    ///
    /// Output:
    /// - Session with the resolver activated and matching translations loaded.
    pub fn start(settings: &Settings, path: &str) -> Self {
        Self::with_platform(FilePlatform::from_env(), settings.default_locale, path)
    }

    /// What: Resolve the startup locale against an explicit platform.
    pub fn with_platform(mut platform: FilePlatform, default_locale: Locale, path: &str) -> Self {
        let mut router = MemoryRouter::at(path);
        let mut resolver = LocaleResolver::new(default_locale);
        resolver.subscribe(|change| {
            tracing::debug!(locale = %change.locale, redirect = %change.redirect, "[CLI] locale changed");
        });
        if let Some(redirect) = resolver.activate(&mut platform, &mut router) {
            tracing::info!(locale = %resolver.active(), redirect = %redirect, "[CLI] locale resolved");
        }
        let translations = Translations::for_locale(resolver.active());
        Self {
            platform,
            router,
            resolver,
            translations,
        }
    }
}

/// What: Print the language switcher.
///
/// Details:
/// - Notes on stderr when no preference store exists and the default locale is kept.
pub fn handle_show(session: &Session) {
    if session.resolver.state() == ResolverState::Init {
        eprintln!(
            "{}",
            session
                .translations
                .t_fmt("locale.skipped", &[&session.resolver.active()])
        );
    }
    println!(
        "{}",
        atelier::ui::render_language_switcher(session.resolver.active(), &session.translations)
    );
}

/// What: Switch to the language named by `code`.
///
/// Inputs:
/// - `session`: Active locale session
/// - `code`: Requested language code
///
/// Output:
/// - `false` when `code` is not a supported locale.
///
/// Details:
/// - Persists the choice when a store exists; prints the redirect in the new language.
pub fn handle_set(session: &mut Session, code: &str) -> bool {
    let locale = match code.parse::<Locale>() {
        Ok(locale) => locale,
        Err(e) => {
            eprintln!("{e}");
            tracing::warn!(code, "[CLI] unsupported locale requested");
            return false;
        }
    };
    let redirect = session
        .resolver
        .set_locale(locale, &mut session.platform, &mut session.router);
    session.translations = Translations::for_locale(locale);
    if !session.platform.has_persistent_store() {
        eprintln!("{}", session.translations.t_fmt("locale.skipped", &[&locale]));
    }
    println!(
        "{}",
        session
            .translations
            .t_fmt("locale.switched", &[&locale.label(), &redirect])
    );
    true
}
