//! Locale file loading and parsing.

use crate::i18n::translations::TranslationMap;
use crate::state::Locale;

/// Bundled English strings.
const EN_YML: &str = include_str!("../../config/locales/en.yml");
/// Bundled Bulgarian strings.
const BG_YML: &str = include_str!("../../config/locales/bg.yml");

/// What: Parse the bundled locale file for `locale`.
///
/// Output:
/// - Flattened `TranslationMap`, or an error describing the YAML problem.
///
/// # Errors
/// - Returns `Err` when the bundled YAML cannot be parsed
pub fn load_bundled(locale: Locale) -> Result<TranslationMap, String> {
    let content = match locale {
        Locale::En => EN_YML,
        Locale::Bg => BG_YML,
    };
    parse_locale_yaml(content)
        .map_err(|e| format!("bundled locale '{locale}' is invalid: {e}"))
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// # Errors
/// - Returns `Err` when the content is empty or is not valid YAML
///
/// Details:
/// - Expects a single top-level key naming the locale (e.g. `bg:`), which is skipped
/// - Flattens nested mappings into dot-notation keys (`shop.title`)
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    if yaml_content.trim().is_empty() {
        return Err("locale file is empty".to_string());
    }
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = TranslationMap::new();
    if let Some(root) = doc.as_mapping() {
        for locale_value in root.values() {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "shop")
/// - `translations`: Map to populate
///
/// Details:
/// - Strings, numbers and booleans become leaf strings; sequences and nulls are skipped
fn flatten_yaml_value(value: &serde_norway::Value, prefix: &str, translations: &mut TranslationMap) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                let Some(key_str) = key.as_str() else {
                    continue;
                };
                let next = if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml_value(val, &next, translations);
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => tracing::debug!(key = prefix, "[i18n] skipping non-scalar translation value"),
    }
}
