//! Completing partial phrase tables from the default locale

use super::Translations;
use crate::ids::DEFAULT_LOCALE;

/// What [`fill_missing_keys`] changed and found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackReport {
    /// Keys copied from the default locale, over all languages
    pub filled: usize,
    /// Keys of the debugged language whose text equals the default locale's
    pub untranslated: Vec<String>,
    /// Keys the debugged language lacked before filling
    pub missing: Vec<String>,
}

/// Give every language every key of the default locale.
///
/// Existing values are never overwritten. With `debug_language` set, keys of
/// that language that are missing, or identical to the default text, are
/// reported and logged.
pub fn fill_missing_keys(translations: &mut Translations, debug_language: Option<&str>) -> FallbackReport {
    let mut report = FallbackReport::default();
    let Some(default) = translations.dicts.get(DEFAULT_LOCALE).cloned() else {
        tracing::warn!("No '{}' phrase table, nothing to fall back to", DEFAULT_LOCALE);
        return report;
    };

    for (key, default_text) in &default {
        for (lang, dict) in &mut translations.dicts {
            let debugged = debug_language == Some(lang.as_str());

            if debugged
                && lang != DEFAULT_LOCALE
                && !key.is_empty()
                && dict.get(key) == Some(default_text)
            {
                tracing::warn!("{} phrase \"{}\" is the same as in English", lang, default_text);
                report.untranslated.push(key.clone());
            }

            if !dict.contains_key(key) {
                if debugged {
                    tracing::warn!("{} phrase table is missing \"{}\"", lang, key);
                    report.missing.push(key.clone());
                }
                dict.insert(key.clone(), default_text.clone());
                report.filled += 1;
            }
        }
    }

    tracing::debug!("Filled {} missing phrases from '{}'", report.filled, DEFAULT_LOCALE);
    report
}

/// The language generated text is written in.
///
/// Translation debugging redirects to the debugged language. A language with
/// no phrase table falls back to the default locale.
pub fn resolve_language(translations: &Translations, requested: &str, debug_language: Option<&str>) -> String {
    let wanted = match debug_language {
        Some(debug_lang) => {
            tracing::warn!("Translation debugging mode enabled, using language '{}'", debug_lang);
            debug_lang
        }
        None => requested,
    };

    if translations.has_language(wanted) {
        wanted.to_string()
    } else {
        tracing::warn!(
            "No phrase table for language '{}', falling back to '{}'",
            wanted,
            DEFAULT_LOCALE
        );
        DEFAULT_LOCALE.to_string()
    }
}
