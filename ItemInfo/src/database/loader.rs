//! Snapshot directory I/O
//!
//! A snapshot directory mirrors the server database layout:
//!
//! ```text
//! snapshot/
//! ├── items.json            (required)
//! ├── handbook.json         (required)
//! ├── prices.json
//! ├── traders.json          { "<traderId>": { "base": ..., "assort": ... } }
//! ├── quests.json
//! ├── globals.json
//! ├── hideout/
//! │   ├── areas.json
//! │   ├── production.json
//! │   └── settings.json
//! └── locales/
//!     └── <lang>.json
//! ```
//!
//! Optional tables that are missing load as empty.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::globals::GlobalsFile;
use super::hideout::{HideoutArea, HideoutSettings, ProductionFile};
use super::{Database, Handbook, Hideout, ItemTable, Quest, Trader, skip_malformed};
use crate::error::{Error, Result};
use crate::locale::{LocaleDict, LocaleStore};

/// Load a snapshot directory into memory.
///
/// # Errors
/// Returns [`Error::TableNotFound`] if `items.json` or `handbook.json` is
/// missing, and [`Error::TableParse`] for any table that fails to parse.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Database> {
    let dir = dir.as_ref();
    tracing::info!("Loading snapshot from {}", dir.display());

    let items: ItemTable = read_required(&dir.join("items.json"))?;
    let handbook: Handbook = read_required(&dir.join("handbook.json"))?;
    let prices: HashMap<String, f64> = read_optional(&dir.join("prices.json"))?.unwrap_or_default();
    let traders: IndexMap<String, Trader> =
        read_optional(&dir.join("traders.json"))?.unwrap_or_default();
    let quests: IndexMap<String, Quest> =
        read_optional(&dir.join("quests.json"))?.unwrap_or_default();
    let globals: GlobalsFile = read_optional(&dir.join("globals.json"))?.unwrap_or_default();

    let hideout_dir = dir.join("hideout");
    let hideout = Hideout {
        areas: read_optional::<Vec<Value>>(&hideout_dir.join("areas.json"))?
            .map(|areas| skip_malformed::<HideoutArea>(areas, "hideout area"))
            .unwrap_or_default(),
        production: read_optional::<ProductionFile>(&hideout_dir.join("production.json"))?
            .map(Into::into)
            .unwrap_or_default(),
        settings: read_optional::<HideoutSettings>(&hideout_dir.join("settings.json"))?
            .unwrap_or_default(),
    };

    let locales = load_locales(&dir.join("locales"))?;

    tracing::info!(
        "Loaded {} items, {} handbook entries, {} traders, {} recipes, {} quests, {} locales",
        items.len(),
        handbook.items().len(),
        traders.len(),
        hideout.production.len(),
        quests.len(),
        locales.len()
    );

    Ok(Database {
        items,
        handbook,
        prices,
        traders,
        hideout,
        quests,
        armor_materials: globals.config.armor_materials,
        locales,
    })
}

/// Write the tables the enrichment pass mutates back into `dir`.
///
/// Writes `items.json` and one `locales/<lang>.json` per loaded locale.
///
/// # Errors
/// Returns an error if a directory cannot be created or a file written.
pub fn write_dir<P: AsRef<Path>>(db: &Database, dir: P) -> Result<()> {
    let dir = dir.as_ref();
    let locale_dir = dir.join("locales");
    std::fs::create_dir_all(&locale_dir)?;

    write_json(&dir.join("items.json"), &db.items)?;
    for (lang, dict) in db.locales.iter() {
        write_json(&locale_dir.join(format!("{lang}.json")), dict)?;
    }

    tracing::info!(
        "Wrote {} items and {} locales to {}",
        db.items.len(),
        db.locales.len(),
        dir.display()
    );
    Ok(())
}

fn load_locales(dir: &Path) -> Result<LocaleStore> {
    let mut store = LocaleStore::default();
    if !dir.is_dir() {
        tracing::warn!("No locales directory at {}", dir.display());
        return Ok(store);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in paths {
        let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let dict: LocaleDict = read_required(&path)?;
        tracing::debug!("Loaded locale {} ({} keys)", lang, dict.len());
        store.insert(lang.to_string(), dict);
    }

    Ok(store)
}

fn read_required<T: DeserializeOwned>(path: &Path) -> Result<T> {
    read_optional(path)?.ok_or_else(|| Error::TableNotFound {
        path: path.to_path_buf(),
    })
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::debug!("Optional table {} not present", path.display());
        return Ok(None);
    }
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| Error::TableParse {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
