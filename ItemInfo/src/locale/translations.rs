//! Bundled phrase tables used in generated text

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::DEFAULT_LOCALE;

const BUNDLED: &str = include_str!("../../config/translations.json");

/// A phrase used in generated description lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    Bought,
    At,
    Lv,
    Traded,
    Crafted,
    PerItem,
    Need,
    Found,
    Tool,
    Part,
    SlotEfficiency,
    ArmorClass,
    EffectiveDurability,
    Max,
    RepairDegradation,
    AmbientVolume,
    Compressor,
    Gain,
    Threshold,
    Boost,
    ResonanceFilter,
    Distortion,
}

impl Phrase {
    /// Key of the phrase in the translation tables
    pub fn key(self) -> &'static str {
        match self {
            Self::Bought => "Bought",
            Self::At => "at",
            Self::Lv => "lv",
            Self::Traded => "Traded",
            Self::Crafted => "Crafted",
            Self::PerItem => "peritem",
            Self::Need => "Need",
            Self::Found => "Found",
            Self::Tool => "Tool",
            Self::Part => "Part",
            Self::SlotEfficiency => "Slotefficiency",
            Self::ArmorClass => "Armorclass",
            Self::EffectiveDurability => "Effectivedurability",
            Self::Max => "Max",
            Self::RepairDegradation => "Repairdegradation",
            Self::AmbientVolume => "AmbientVolume",
            Self::Compressor => "Compressor",
            Self::Gain => "Gain",
            Self::Threshold => "Treshold",
            Self::Boost => "Boost",
            Self::ResonanceFilter => "ResonanceFilter",
            Self::Distortion => "Distortion",
        }
    }
}

/// Phrase tables keyed by language
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    pub dicts: IndexMap<String, IndexMap<String, String>>,
}

impl Translations {
    /// The tables shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.dicts.contains_key(lang)
    }

    /// Phrase lookup for one language.
    ///
    /// Languages without a table read the default locale's phrases.
    pub fn for_language<'a>(&'a self, lang: &str) -> I18n<'a> {
        I18n {
            dict: self.dicts.get(lang),
            default: self.dicts.get(DEFAULT_LOCALE),
        }
    }
}

/// Phrase getter bound to one language
#[derive(Debug, Clone, Copy)]
pub struct I18n<'a> {
    dict: Option<&'a IndexMap<String, String>>,
    default: Option<&'a IndexMap<String, String>>,
}

impl<'a> I18n<'a> {
    /// Translated phrase, falling back to the default locale and finally the key itself
    pub fn get(&self, phrase: Phrase) -> &'a str {
        let key = phrase.key();
        self.dict
            .and_then(|d| d.get(key))
            .or_else(|| self.default.and_then(|d| d.get(key)))
            .map_or(key, String::as_str)
    }
}
