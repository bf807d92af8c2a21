//! Active UI language: resolution at startup, persistence, redirect paths.

use crate::locale::detection::locale_for_tag;
use crate::locale::path::{first_segment, rewrite_locale_path};
use crate::platform::{Platform, Router};
use crate::state::{ChangeNotifier, Locale, SubscriptionId};

/// Storage key of the persisted language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "userLanguagePreference";

/// Resolution progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    /// Not activated yet (or activation skipped for lack of a store).
    Init,
    /// No usable stored preference; reading the environment language.
    Detecting,
    /// Active locale known and persisted.
    Resolved(Locale),
}

/// Notification sent when the active locale changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChanged {
    /// New active locale.
    pub locale: Locale,
    /// Navigation target that was requested.
    pub redirect: String,
}

/// Determines, persists and switches the active UI language.
#[derive(Debug)]
pub struct LocaleResolver {
    /// Resolution progress.
    state: ResolverState,
    /// Active locale; the static default until resolution runs.
    active: Locale,
    /// Listeners for locale changes.
    notifier: ChangeNotifier<LocaleChanged>,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl LocaleResolver {
    /// What: Resolver in `Init` with `static_default` active.
    #[must_use]
    pub fn new(static_default: Locale) -> Self {
        Self {
            state: ResolverState::Init,
            active: static_default,
            notifier: ChangeNotifier::default(),
        }
    }

    /// Current resolution state.
    #[must_use]
    pub const fn state(&self) -> ResolverState {
        self.state
    }

    /// Active locale.
    #[must_use]
    pub const fn active(&self) -> Locale {
        self.active
    }

    /// What: Resolve the startup locale and redirect to it.
    ///
    /// Inputs:
    /// - `platform`: Preference store and environment language
    /// - `router`: Current route and navigation sink
    ///
    /// Output:
    /// - `Some(path)` navigated to; `None` when skipped (no store) or already resolved.
    ///
    /// Details:
    /// - A stored supported preference wins and is not rewritten
    /// - Otherwise the environment's primary language subtag is used if supported, else `en`,
    ///   and that choice is persisted
    /// - Without a persistent store nothing happens: no state change, no navigation
    pub fn activate<P, R>(&mut self, platform: &mut P, router: &mut R) -> Option<String>
    where
        P: Platform + ?Sized,
        R: Router + ?Sized,
    {
        if self.state != ResolverState::Init {
            tracing::debug!(state = ?self.state, "[Locale] already activated");
            return None;
        }
        if !platform.has_persistent_store() {
            tracing::debug!(
                active = %self.active,
                "[Locale] no persistent store; skipping locale resolution"
            );
            return None;
        }

        let stored = platform.read_preference(LANGUAGE_STORAGE_KEY);
        if let Some(locale) = stored.as_deref().and_then(Locale::from_code) {
            tracing::debug!(locale = %locale, "[Locale] using stored preference");
            return Some(self.resolve_and_redirect(locale, router));
        }
        if let Some(unsupported) = stored {
            tracing::warn!(
                value = %unsupported,
                "[Locale] ignoring unsupported stored preference"
            );
        }

        self.state = ResolverState::Detecting;
        let tag = platform.current_language_tag();
        let detected = locale_for_tag(tag.as_deref());
        tracing::debug!(tag = ?tag, detected = %detected, "[Locale] detected environment language");
        if let Err(e) = platform.write_preference(LANGUAGE_STORAGE_KEY, detected.code()) {
            tracing::warn!(error = %e, "[Locale] failed to persist detected locale");
        }
        Some(self.resolve_and_redirect(detected, router))
    }

    /// What: Switch to a user-selected locale.
    ///
    /// Inputs:
    /// - `locale`: Supported locale picked by the user
    /// - `platform`: Preference store
    /// - `router`: Current route and navigation sink
    ///
    /// Output:
    /// - The redirect path navigated to.
    ///
    /// Details:
    /// - Persists immediately; a missing store only skips persistence (logged)
    pub fn set_locale<P, R>(&mut self, locale: Locale, platform: &mut P, router: &mut R) -> String
    where
        P: Platform + ?Sized,
        R: Router + ?Sized,
    {
        if let Err(e) = platform.write_preference(LANGUAGE_STORAGE_KEY, locale.code()) {
            tracing::debug!(error = %e, locale = %locale, "[Locale] preference not persisted");
        }
        tracing::info!(from = %self.active, to = %locale, "[Locale] locale changed by user");
        self.resolve_and_redirect(locale, router)
    }

    /// Register a listener for locale changes.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&LocaleChanged) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a locale listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Enter `Resolved(locale)`, navigate to the rewritten route and notify.
    fn resolve_and_redirect<R: Router + ?Sized>(&mut self, locale: Locale, router: &mut R) -> String {
        let current = router.current_path();
        if let Some(seg) = first_segment(&current)
            && Locale::from_code(seg).is_none()
        {
            tracing::debug!(
                path = %current,
                segment = seg,
                "[Locale] replacing a leading segment that is not a locale code"
            );
        }
        let redirect = rewrite_locale_path(&current, locale);
        self.state = ResolverState::Resolved(locale);
        self.active = locale;
        router.navigate(&redirect);
        self.notifier.notify(&LocaleChanged {
            locale,
            redirect: redirect.clone(),
        });
        redirect
    }
}
