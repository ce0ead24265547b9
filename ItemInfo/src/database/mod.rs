//! In-memory snapshot of the server database tables
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! The snapshot is loaded once (see [`loader`]), read by every generator and
//! mutated only by the enrichment pass, which rewrites item locale strings and
//! background colors.

pub mod globals;
pub mod handbook;
pub mod hideout;
pub mod items;
pub mod loader;
pub mod quests;
pub mod traders;

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::ids;
use crate::locale::LocaleStore;

pub use globals::ArmorMaterial;
pub use handbook::{Handbook, HandbookCategory, HandbookItem};
pub use hideout::{AreaStage, Hideout, HideoutArea, HideoutSettings, ProductionRecipe, Requirement};
pub use items::{ItemClass, ItemProps, ItemTable, TemplateItem, ancestors};
pub use loader::{load_dir, write_dir};
pub use quests::{Quest, QuestCondition};
pub use traders::{Assort, AssortEntry, SchemeRequirement, Trader, TraderBase};

/// All tables the enrichment pass reads, plus the locales it writes.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub items: ItemTable,
    pub handbook: Handbook,
    /// Flea market prices by item id
    pub prices: HashMap<String, f64>,
    pub traders: IndexMap<String, Trader>,
    pub hideout: Hideout,
    pub quests: IndexMap<String, Quest>,
    pub armor_materials: HashMap<String, ArmorMaterial>,
    pub locales: LocaleStore,
}

impl Database {
    /// Whether the template is a real, sellable item.
    ///
    /// Category nodes, items missing from the handbook, quest items and
    /// currencies are skipped by the enrichment pass.
    pub fn is_real_item(&self, id: &str) -> bool {
        self.items.get(id).is_some_and(|item| {
            item.is_item()
                && self.handbook.contains(id)
                && !item.props.quest_item.unwrap_or(false)
                && item.parent != ids::CURRENCY
        })
    }

    /// Ids of every real item, in table order
    pub fn real_item_ids(&self) -> Vec<String> {
        self.items
            .keys()
            .filter(|id| self.is_real_item(id))
            .cloned()
            .collect()
    }

    /// Trader by id, if present in the snapshot
    pub fn trader(&self, id: &str) -> Option<&Trader> {
        self.traders.get(id)
    }

    /// Traders in sell-priority order, skipping any the snapshot lacks
    pub fn traders_by_priority(&self) -> impl Iterator<Item = &Trader> {
        ids::TRADER_PRIORITY
            .iter()
            .filter_map(|id| self.traders.get(*id))
    }

    /// Hideout area by its type number
    pub fn area(&self, area_type: i64) -> Option<&HideoutArea> {
        self.hideout
            .areas
            .iter()
            .find(|area| area.area_type == area_type)
    }
}

/// Interpret a JSON value as a number, accepting numeric strings.
pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    }
}

/// Deserialize an optional number that mods sometimes write as a string.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Deserialize each element on its own, dropping the ones that fail.
pub(crate) fn skip_malformed<T: DeserializeOwned>(values: Vec<Value>, what: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!("Skipping malformed {} #{}: {}", what, index, err);
                None
            }
        })
        .collect()
}

/// Like [`lenient_number`], with missing or malformed values read as zero.
pub(crate) fn lenient_number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}
