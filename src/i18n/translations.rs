//! Translation tables for one active locale plus the English fallback.

use std::collections::HashMap;

use crate::state::Locale;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// Strings for the active locale, backed by English.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    /// Locale the primary table belongs to.
    locale: Locale,
    /// Strings of the active locale.
    primary: TranslationMap,
    /// English strings used when a key is missing from `primary`.
    fallback: TranslationMap,
}

impl Translations {
    /// What: Build translations from explicit tables.
    #[must_use]
    pub const fn new(locale: Locale, primary: TranslationMap, fallback: TranslationMap) -> Self {
        Self {
            locale,
            primary,
            fallback,
        }
    }

    /// What: Load the bundled tables for `locale`.
    ///
    /// Output:
    /// - Translations whose fallback is always the bundled English table.
    ///
    /// Details:
    /// - A table that fails to parse is logged and treated as empty, so lookups degrade to
    ///   English and then to the key itself.
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        let fallback = super::loader::load_bundled(Locale::En).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "[i18n] failed to load English strings");
            TranslationMap::new()
        });
        let primary = if locale == Locale::En {
            fallback.clone()
        } else {
            super::loader::load_bundled(locale).unwrap_or_else(|e| {
                tracing::warn!(locale = %locale, error = %e, "[i18n] failed to load locale strings");
                TranslationMap::new()
            })
        };
        Self::new(locale, primary, fallback)
    }

    /// Locale of the primary table.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// What: Translate `key`.
    ///
    /// Output:
    /// - Primary string, else the English string, else the key itself (logged at debug level).
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        if let Some(s) = self.primary.get(key) {
            return s.clone();
        }
        if let Some(s) = self.fallback.get(key) {
            tracing::debug!(key, locale = %self.locale, "[i18n] key missing in locale, using English");
            return s.clone();
        }
        tracing::debug!(key, "[i18n] missing translation key");
        key.to_string()
    }

    /// What: Translate `key` and fill its `{}` placeholders in order.
    ///
    /// Details:
    /// - Extra arguments are ignored; unfilled placeholders stay as `{}`.
    #[must_use]
    pub fn t_fmt(&self, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        args.iter().fold(self.t(key), |acc, arg| {
            acc.replacen("{}", &arg.to_string(), 1)
        })
    }
}
