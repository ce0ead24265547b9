//! Trader bases, buy rules and assortments

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_number_or_zero, number_from_value};

/// A trader: base data plus an optional assortment
#[derive(Debug, Clone, Deserialize)]
pub struct Trader {
    pub base: TraderBase,
    #[serde(default)]
    pub assort: Option<Assort>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderBase {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(rename = "loyaltyLevels", default)]
    pub loyalty_levels: Vec<LoyaltyLevel>,
    /// Items the trader buys from the player
    #[serde(default)]
    pub items_buy: BuyRule,
    /// Items the trader refuses even when `items_buy` matches
    #[serde(default)]
    pub items_buy_prohibited: BuyRule,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoyaltyLevel {
    #[serde(default, deserialize_with = "lenient_number_or_zero")]
    pub buy_price_coef: f64,
}

/// Category and id lists of a trader buy rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuyRule {
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub id_list: Vec<String>,
}

impl BuyRule {
    /// Whether the item or one of its base classes is listed
    pub fn matches(&self, id: &str, base_classes: &[&str]) -> bool {
        self.id_list.iter().any(|x| x == id)
            || self
                .category
                .iter()
                .any(|c| base_classes.contains(&c.as_str()))
    }
}

impl TraderBase {
    /// Whether the trader buys the item: listed by category or id, and not
    /// on the prohibited id list.
    pub fn buys(&self, id: &str, base_classes: &[&str]) -> bool {
        self.items_buy.matches(id, base_classes)
            && !self.items_buy_prohibited.id_list.iter().any(|x| x == id)
    }

    /// Sell multiplier at the first loyalty level, 0 when no levels exist
    pub fn sell_multiplier(&self) -> f64 {
        self.loyalty_levels
            .first()
            .map_or(0.0, |level| (100.0 - level.buy_price_coef) / 100.0)
    }
}

/// One listing of a trader assortment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssortEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_tpl")]
    pub tpl: String,
    /// `"hideout"` for top-level listings, otherwise the containing entry id
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(rename = "slotId", default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
}

/// One requirement of a barter scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeRequirement {
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(default, deserialize_with = "lenient_number_or_zero")]
    pub count: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AssortFile {
    #[serde(default)]
    items: Vec<AssortEntry>,
    #[serde(default)]
    barter_scheme: IndexMap<String, Vec<Vec<SchemeRequirement>>>,
    #[serde(default)]
    loyal_level_items: HashMap<String, Value>,
}

/// A trader assortment, indexed by entry id
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "AssortFile")]
pub struct Assort {
    items: Vec<AssortEntry>,
    barter_scheme: IndexMap<String, Vec<Vec<SchemeRequirement>>>,
    loyal_level_items: HashMap<String, u32>,
    index: HashMap<String, usize>,
}

impl From<AssortFile> for Assort {
    fn from(file: AssortFile) -> Self {
        let loyal_level_items = file
            .loyal_level_items
            .into_iter()
            .map(|(id, level)| (id, number_from_value(&level).unwrap_or(1.0) as u32))
            .collect();
        Self::new(file.items, file.barter_scheme, loyal_level_items)
    }
}

impl Assort {
    pub fn new(
        items: Vec<AssortEntry>,
        barter_scheme: IndexMap<String, Vec<Vec<SchemeRequirement>>>,
        loyal_level_items: HashMap<String, u32>,
    ) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.id.clone(), i))
            .collect();
        Self {
            items,
            barter_scheme,
            loyal_level_items,
            index,
        }
    }

    /// All listings in assortment order
    pub fn entries(&self) -> &[AssortEntry] {
        &self.items
    }

    /// Look up a listing by its entry id
    pub fn entry(&self, id: &str) -> Option<&AssortEntry> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// First requirement set of a listing's barter scheme
    pub fn scheme(&self, entry_id: &str) -> Option<&[SchemeRequirement]> {
        self.barter_scheme
            .get(entry_id)
            .and_then(|sets| sets.first())
            .map(Vec::as_slice)
    }

    /// All barter schemes, keyed by entry id
    pub fn schemes(&self) -> impl Iterator<Item = (&str, &[SchemeRequirement])> {
        self.barter_scheme
            .iter()
            .filter_map(|(id, sets)| sets.first().map(|set| (id.as_str(), set.as_slice())))
    }

    /// Loyalty level required for a listing (0 when unlisted)
    pub fn loyalty_level(&self, entry_id: &str) -> u32 {
        self.loyal_level_items.get(entry_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_rule_and_prohibition() {
        let base: TraderBase = serde_json::from_str(
            r#"{ "_id": "t", "nickname": "Trader",
                 "loyaltyLevels": [{ "buy_price_coef": 37 }],
                 "items_buy": { "category": ["meds"], "id_list": ["special"] },
                 "items_buy_prohibited": { "category": [], "id_list": ["banned"] } }"#,
        )
        .unwrap();

        assert!(base.buys("salewa", &["meds", "root"]));
        assert!(base.buys("special", &["other"]));
        assert!(!base.buys("banned", &["meds"]));
        assert!(!base.buys("gun", &["weapons"]));
        assert!((base.sell_multiplier() - 0.63).abs() < 1e-9);
    }

    #[test]
    fn test_assort_lookup() {
        let assort: Assort = serde_json::from_str(
            r#"{ "items": [{ "_id": "e1", "_tpl": "tpl1", "parentId": "hideout", "slotId": "hideout" }],
                 "barter_scheme": { "e1": [[{ "_tpl": "roubles", "count": 1000 }]] },
                 "loyal_level_items": { "e1": 2 } }"#,
        )
        .unwrap();

        assert_eq!(assort.entry("e1").map(|e| e.tpl.as_str()), Some("tpl1"));
        assert_eq!(assort.scheme("e1").map(<[_]>::len), Some(1));
        assert_eq!(assort.loyalty_level("e1"), 2);
        assert_eq!(assort.loyalty_level("missing"), 0);
        assert!(assort.scheme("missing").is_none());
    }
}
