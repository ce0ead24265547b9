//! Locale dictionaries and item text mutation
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Game locales are flat string tables keyed by composite keys such as
//! `"<itemId> Name"` or `"hideout_area_10_name"`. [`LocaleKey`] is the one
//! place those keys are spelled out.

pub mod fallback;
pub mod names;
pub mod translations;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::database::items::ItemProps;
use crate::ids::DEFAULT_LOCALE;

pub use fallback::{FallbackReport, fill_missing_keys, resolve_language};
pub use names::Names;
pub use translations::{I18n, Phrase, Translations};

/// One language's string table
pub type LocaleDict = IndexMap<String, String>;

/// Item text field addressed by a locale key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    ShortName,
    Description,
}

impl ItemField {
    fn suffix(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::ShortName => "ShortName",
            Self::Description => "Description",
        }
    }

    /// The item's own (non-localized) value for this field
    fn builtin(self, props: &ItemProps) -> Option<&str> {
        match self {
            Self::Name => props.name.as_deref(),
            Self::ShortName => props.short_name.as_deref(),
            Self::Description => props.description.as_deref(),
        }
    }
}

/// A typed locale key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleKey<'a> {
    Item { id: &'a str, field: ItemField },
    TraderNickname(&'a str),
    /// Quest names use a lowercase `name` suffix
    QuestName(&'a str),
    HideoutArea(i64),
    ArmorMaterial(&'a str),
    Raw(&'a str),
}

impl fmt::Display for LocaleKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item { id, field } => write!(f, "{id} {}", field.suffix()),
            Self::TraderNickname(id) => write!(f, "{id} Nickname"),
            Self::QuestName(id) => write!(f, "{id} name"),
            Self::HideoutArea(area_type) => write!(f, "hideout_area_{area_type}_name"),
            Self::ArmorMaterial(name) => write!(f, "Mat{name}"),
            Self::Raw(key) => f.write_str(key),
        }
    }
}

/// Where a text fragment goes relative to the current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Prepend,
    Append,
}

impl Placement {
    pub fn apply(self, current: &str, text: &str) -> String {
        match self {
            Self::Prepend => format!("{text}{current}"),
            Self::Append => format!("{current}{text}"),
        }
    }
}

/// Which locales a mutation touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Every loaded locale, each composed from its own current value
    All,
    Only(&'a str),
}

/// Every loaded game locale, in load order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleStore {
    dicts: IndexMap<String, LocaleDict>,
}

impl LocaleStore {
    pub fn insert(&mut self, lang: String, dict: LocaleDict) {
        self.dicts.insert(lang, dict);
    }

    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }

    pub fn contains_language(&self, lang: &str) -> bool {
        self.dicts.contains_key(lang)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleDict)> {
        self.dicts.iter().map(|(lang, dict)| (lang.as_str(), dict))
    }

    /// Raw lookup in one language
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.dicts.get(lang)?.get(key).map(String::as_str)
    }

    /// Look up a key in `lang`, then in the default locale.
    pub fn lookup(&self, lang: &str, key: LocaleKey<'_>) -> Option<&str> {
        let key = key.to_string();
        self.get(lang, &key)
            .or_else(|| self.get(DEFAULT_LOCALE, &key))
    }

    /// Set a key in one language, creating the dictionary if needed
    pub fn set(&mut self, lang: &str, key: LocaleKey<'_>, value: String) {
        self.dicts
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Current text of an item field: `lang`, then the default locale, then
    /// the item's built-in value.
    pub fn item_text<'a>(
        &'a self,
        lang: &str,
        id: &str,
        field: ItemField,
        props: Option<&'a ItemProps>,
    ) -> Option<&'a str> {
        self.lookup(lang, LocaleKey::Item { id, field })
            .or_else(|| props.and_then(|p| field.builtin(p)))
    }

    /// Compose `text` into an item field.
    ///
    /// Every call composes exactly once; applying the same fragment twice
    /// yields it twice. An absent current value composes as empty.
    pub fn add_to(
        &mut self,
        id: &str,
        field: ItemField,
        text: &str,
        placement: Placement,
        scope: Scope<'_>,
        props: Option<&ItemProps>,
    ) {
        let langs: Vec<String> = match scope {
            Scope::All => self.dicts.keys().cloned().collect(),
            Scope::Only(lang) => vec![lang.to_string()],
        };

        for lang in langs {
            let current = self.item_text(&lang, id, field, props).unwrap_or_default();
            let composed = placement.apply(current, text);
            self.set(&lang, LocaleKey::Item { id, field }, composed);
        }
    }
}
