//! In-memory snapshots for unit tests

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::database::traders::{BuyRule, LoyaltyLevel};
use crate::database::{
    ArmorMaterial, Assort, AssortEntry, Database, Handbook, HandbookItem, HideoutArea, ProductionRecipe,
    Quest, SchemeRequirement, TemplateItem, Trader, TraderBase,
};
use crate::locale::LocaleKey;

/// A real item template with the given props
pub fn item_props(id: &str, parent: &str, props: Value) -> TemplateItem {
    template(id, parent, "Item", props)
}

fn template(id: &str, parent: &str, kind: &str, props: Value) -> TemplateItem {
    serde_json::from_value(json!({
        "_id": id, "_name": id, "_parent": parent, "_type": kind, "_props": props
    }))
    .unwrap()
}

#[derive(Default)]
struct PendingAssort {
    items: Vec<AssortEntry>,
    schemes: IndexMap<String, Vec<Vec<SchemeRequirement>>>,
    loyalty: HashMap<String, u32>,
}

/// Builds a [`Database`] table by table
#[derive(Default)]
pub struct SnapshotBuilder {
    db: Database,
    handbook: Vec<HandbookItem>,
    assorts: HashMap<String, PendingAssort>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A category node
    pub fn node(mut self, id: &str, parent: &str) -> Self {
        self.db
            .items
            .insert(id.to_string(), template(id, parent, "Node", json!({})));
        self
    }

    /// A real item, listed in the handbook at `handbook_price`
    pub fn item(mut self, id: &str, parent: &str, props: Value, handbook_price: f64) -> Self {
        self.db.items.insert(id.to_string(), item_props(id, parent, props));
        self.handbook.push(HandbookItem {
            id: id.to_string(),
            parent_id: parent.to_string(),
            price: handbook_price,
        });
        self
    }

    pub fn flea_price(mut self, id: &str, price: f64) -> Self {
        self.db.prices.insert(id.to_string(), price);
        self
    }

    /// A trader buying the given categories at `(100 - coef)%` of handbook price
    pub fn trader(mut self, id: &str, nickname: &str, coef: f64, categories: &[&str], prohibited: &[&str]) -> Self {
        let base = TraderBase {
            id: id.to_string(),
            nickname: nickname.to_string(),
            loyalty_levels: vec![LoyaltyLevel { buy_price_coef: coef }],
            items_buy: BuyRule {
                category: categories.iter().map(|c| c.to_string()).collect(),
                id_list: Vec::new(),
            },
            items_buy_prohibited: BuyRule {
                category: Vec::new(),
                id_list: prohibited.iter().map(|p| p.to_string()).collect(),
            },
        };
        self.db
            .traders
            .insert(id.to_string(), Trader { base, assort: None });
        self
    }

    /// An assortment listing; an empty scheme leaves the entry without one
    pub fn listing(
        mut self,
        trader: &str,
        entry_id: &str,
        tpl: &str,
        parent: Option<&str>,
        scheme: &[(&str, f64)],
        loyalty: u32,
    ) -> Self {
        let pending = self.assorts.entry(trader.to_string()).or_default();
        pending.items.push(AssortEntry {
            id: entry_id.to_string(),
            tpl: tpl.to_string(),
            parent_id: parent.map(str::to_string),
            slot_id: None,
        });
        if !scheme.is_empty() {
            let requirements = scheme
                .iter()
                .map(|(tpl, count)| SchemeRequirement {
                    tpl: (*tpl).to_string(),
                    count: *count,
                })
                .collect();
            pending
                .schemes
                .insert(entry_id.to_string(), vec![requirements]);
        }
        pending.loyalty.insert(entry_id.to_string(), loyalty);
        self
    }

    pub fn recipe(mut self, recipe: Value) -> Self {
        let recipe: ProductionRecipe = serde_json::from_value(recipe).unwrap();
        self.db.hideout.production.push(recipe);
        self
    }

    pub fn area(mut self, area: Value) -> Self {
        let area: HideoutArea = serde_json::from_value(area).unwrap();
        self.db.hideout.areas.push(area);
        self
    }

    pub fn gpu_boost_rate(mut self, rate: f64) -> Self {
        self.db.hideout.settings.gpu_boost_rate = rate;
        self
    }

    pub fn quest(mut self, quest: Value) -> Self {
        let quest: Quest = serde_json::from_value(quest).unwrap();
        self.db.quests.insert(quest.id.clone(), quest);
        self
    }

    pub fn armor_material(mut self, name: &str, destructibility: f64, min_repair: f64, max_repair: f64) -> Self {
        self.db.armor_materials.insert(
            name.to_string(),
            ArmorMaterial {
                destructibility,
                min_repair_degradation: min_repair,
                max_repair_degradation: max_repair,
            },
        );
        self
    }

    /// A raw locale string, creating the language on first use
    pub fn locale(mut self, lang: &str, key: &str, value: &str) -> Self {
        self.db
            .locales
            .set(lang, LocaleKey::Raw(key), value.to_string());
        self
    }

    pub fn build(mut self) -> Database {
        self.db.handbook = Handbook::new(Vec::new(), self.handbook);
        for (trader_id, pending) in self.assorts {
            if let Some(trader) = self.db.traders.get_mut(&trader_id) {
                trader.assort = Some(Assort::new(pending.items, pending.schemes, pending.loyalty));
            }
        }
        self.db
    }
}
