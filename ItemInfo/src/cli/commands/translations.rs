//! CLI command for checking phrase tables

use std::path::Path;

use crate::config::Config;
use crate::ids::DEFAULT_LOCALE;
use crate::locale::{Translations, fill_missing_keys};

pub fn execute(lang: Option<&str>, config: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => Config::load(path)?,
        None => Config::bundled()?,
    };
    let lang = lang.unwrap_or(&config.translation_debug.language);

    let mut translations = Translations::bundled()?;
    if !translations.has_language(lang) {
        anyhow::bail!(
            "No phrase table for '{}'. Available: {}",
            lang,
            translations.languages().collect::<Vec<_>>().join(", ")
        );
    }

    let report = fill_missing_keys(&mut translations, Some(lang));

    println!("Language:     {lang} (against {DEFAULT_LOCALE})");
    println!("Missing:      {}", report.missing.len());
    println!("Untranslated: {}", report.untranslated.len());

    if !quiet {
        for key in &report.missing {
            println!("  missing       {key}");
        }
        for key in &report.untranslated {
            println!("  untranslated  {key}");
        }
    }

    Ok(())
}
