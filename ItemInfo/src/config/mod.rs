//! Enrichment settings
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Settings live in a TOML file; the crate bundles a default copy. Every
//! section may be omitted, in which case its defaults apply.

pub mod keys;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::DEFAULT_LOCALE;

pub use keys::{KeyMap, KeyMaps, UNKNOWN_KEY_LABEL};

const BUNDLED: &str = include_str!("../../config/config.toml");

/// A section that can only be switched on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggle {
    pub enabled: bool,
}

impl Default for Toggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub enabled: bool,
    pub seconds: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricesInfo {
    pub enabled: bool,
    /// Add a flea market line above the trader line
    pub add_flea_price: bool,
}

impl Default for PricesInfo {
    fn default() -> Self {
        Self {
            enabled: true,
            add_flea_price: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorInfo {
    pub enabled: bool,
    pub add_armor_class_info: bool,
}

impl Default for ArmorInfo {
    fn default() -> Self {
        Self {
            enabled: true,
            add_armor_class_info: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestInfo {
    pub enabled: bool,
    /// Append ✔ to names of items some quest wants found in raid
    pub fir_in_name: bool,
}

impl Default for QuestInfo {
    fn default() -> Self {
        Self {
            enabled: true,
            fir_in_name: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationDebug {
    pub enabled: bool,
    /// Language whose phrase table is checked and used for output
    pub language: String,
}

impl Default for TranslationDebug {
    fn default() -> Self {
        Self {
            enabled: false,
            language: "ru".to_string(),
        }
    }
}

/// All settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language generated text is written in
    pub user_locale: String,
    pub hide_language_alert: bool,
    /// Group price digits (`1,234,567`)
    pub format_price: bool,
    pub delay: DelayConfig,
    pub prices_info: PricesInfo,
    pub armor_info: ArmorInfo,
    pub container_info: Toggle,
    pub headset_info: Toggle,
    pub barter_info: Toggle,
    pub barter_resource_info: Toggle,
    pub production_info: Toggle,
    pub quest_info: QuestInfo,
    pub hideout_info: Toggle,
    pub crafting_material_info: Toggle,
    pub bullet_stats_in_name: Toggle,
    pub key_map_labels: Toggle,
    pub translation_debug: TranslationDebug,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_locale: DEFAULT_LOCALE.to_string(),
            hide_language_alert: false,
            format_price: true,
            delay: DelayConfig::default(),
            prices_info: PricesInfo::default(),
            armor_info: ArmorInfo::default(),
            container_info: Toggle::default(),
            headset_info: Toggle::default(),
            barter_info: Toggle::default(),
            barter_resource_info: Toggle::default(),
            production_info: Toggle::default(),
            quest_info: QuestInfo::default(),
            hideout_info: Toggle::default(),
            crafting_material_info: Toggle::default(),
            bullet_stats_in_name: Toggle::default(),
            key_map_labels: Toggle::default(),
            translation_debug: TranslationDebug::default(),
        }
    }
}

impl Config {
    /// The settings shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The debugged language, when translation debugging is on
    pub fn debug_language(&self) -> Option<&str> {
        self.translation_debug
            .enabled
            .then_some(self.translation_debug.language.as_str())
    }
}
