//! Flea, trader and currency prices
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::database::{Database, TemplateItem, ancestors};
use crate::ids;
use crate::locale::Names;

/// Weight floor used when dividing by weight
pub const MIN_WEIGHT: f64 = 0.001;

/// Trader name used when no trader buys an item
pub const NO_TRADER: &str = "None";

/// A currency a barter scheme can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Roubles,
    Euros,
    Dollars,
}

impl Currency {
    pub fn from_tpl(tpl: &str) -> Option<Self> {
        match tpl {
            ids::ROUBLES => Some(Self::Roubles),
            ids::EUROS => Some(Self::Euros),
            ids::DOLLARS => Some(Self::Dollars),
            _ => None,
        }
    }
}

/// The trader that pays the most for an item
#[derive(Debug, Clone, PartialEq)]
pub struct BestTrader {
    /// Fraction of the handbook price paid, 0 when nobody buys the item
    pub multiplier: f64,
    pub trader_id: Option<String>,
    /// Localized nickname, or [`NO_TRADER`]
    pub name: String,
}

/// Per-slot value density of a full stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotValue {
    pub per_slot: f64,
    pub per_slot_per_kg: f64,
}

/// Value of a full stack per grid cell, and per cell per kilogram.
///
/// Unrounded; callers round when rendering.
///
/// Stack sizes below one count as one; weight is floored at [`MIN_WEIGHT`].
pub fn slot_value(item: &TemplateItem, price: f64) -> SlotValue {
    let stack = item.stack_size();
    let slots = item.slot_count();

    let mut per_slot = price * stack;
    if slots > 1.0 {
        per_slot /= slots;
    }
    let per_slot_per_kg = per_slot / (item.weight().max(MIN_WEIGHT) * stack);

    SlotValue {
        per_slot,
        per_slot_per_kg,
    }
}

/// Price lookups over one snapshot
#[derive(Debug, Clone, Copy)]
pub struct PriceResolver<'a> {
    db: &'a Database,
    names: Names<'a>,
    euro_ratio: f64,
    dollar_ratio: f64,
}

impl<'a> PriceResolver<'a> {
    pub fn new(db: &'a Database, names: Names<'a>) -> Self {
        Self {
            db,
            names,
            euro_ratio: currency_ratio(db, ids::EUROS),
            dollar_ratio: currency_ratio(db, ids::DOLLARS),
        }
    }

    /// Flea price, else handbook price, else 0
    pub fn flea_price(&self, id: &str) -> f64 {
        self.db
            .prices
            .get(id)
            .copied()
            .or_else(|| self.db.handbook.price(id))
            .unwrap_or(0.0)
    }

    pub fn handbook_price(&self, id: &str) -> f64 {
        self.db.handbook.price(id).unwrap_or(0.0)
    }

    /// First trader in priority order that buys the item
    pub fn best_trader(&self, id: &str) -> BestTrader {
        let base_classes = ancestors(&self.db.items, id);

        for trader in self.db.traders_by_priority() {
            if trader.base.buys(id, &base_classes) {
                return BestTrader {
                    multiplier: trader.base.sell_multiplier(),
                    trader_id: Some(trader.base.id.clone()),
                    name: self.names.trader_name(&trader.base.id).to_string(),
                };
            }
        }

        BestTrader {
            multiplier: 0.0,
            trader_id: None,
            name: NO_TRADER.to_string(),
        }
    }

    /// What the best trader pays for one item
    pub fn best_trader_price(&self, id: &str) -> (f64, BestTrader) {
        let best = self.best_trader(id);
        (self.handbook_price(id) * best.multiplier, best)
    }

    /// Roubles per unit of the currency
    pub fn rouble_ratio(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Roubles => 1.0,
            Currency::Euros => self.euro_ratio,
            Currency::Dollars => self.dollar_ratio,
        }
    }
}

fn currency_ratio(db: &Database, currency: &str) -> f64 {
    db.handbook.price(currency).unwrap_or_else(|| {
        tracing::warn!("Currency {} missing from the handbook, converting at 0", currency);
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SnapshotBuilder, item_props};
    use serde_json::json;

    #[test]
    fn test_slot_value_density() {
        let item = item_props("x", "misc", json!({ "Width": 1, "Height": 1, "Weight": 0.5 }));
        let value = slot_value(&item, 15_000.0);
        assert_eq!(value.per_slot, 15_000.0);
        assert_eq!(value.per_slot_per_kg, 30_000.0);
    }

    #[test]
    fn test_slot_value_stack_and_weightless() {
        let item = item_props(
            "x",
            "misc",
            json!({ "Width": 2, "Height": 1, "Weight": 0, "StackMaxSize": 50 }),
        );
        let value = slot_value(&item, 10.0);
        assert_eq!(value.per_slot, 250.0);
        assert_eq!(value.per_slot_per_kg, 5_000.0);

        let zero_stack = item_props("y", "misc", json!({ "StackMaxSize": 0 }));
        assert_eq!(slot_value(&zero_stack, 10.0).per_slot, 10.0);
    }

    #[test]
    fn test_flea_price_fallbacks() {
        let db = SnapshotBuilder::new()
            .item("flea", "misc", json!({}), 100.0)
            .item("book", "misc", json!({}), 200.0)
            .flea_price("flea", 150.0)
            .build();
        let prices = PriceResolver::new(&db, Names::new(&db, "en"));

        assert_eq!(prices.flea_price("flea"), 150.0);
        assert_eq!(prices.flea_price("book"), 200.0);
        assert_eq!(prices.flea_price("nothing"), 0.0);
    }

    #[test]
    fn test_best_trader_priority_and_prohibition() {
        let db = SnapshotBuilder::new()
            .node("meds", "root")
            .item("salewa", "meds", json!({}), 1000.0)
            .item("banned", "meds", json!({}), 1000.0)
            .trader(ids::PRAPOR, "Prapor", 50.0, &["meds"], &[])
            .trader(ids::THERAPIST, "Therapist", 37.0, &["meds"], &["banned"])
            .build();
        let prices = PriceResolver::new(&db, Names::new(&db, "en"));

        let (price, best) = prices.best_trader_price("salewa");
        assert_eq!(best.name, "Therapist");
        assert!((price - 630.0).abs() < 1e-9);

        let (price, best) = prices.best_trader_price("banned");
        assert_eq!(best.name, "Prapor");
        assert!((price - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_trader_sentinel() {
        let db = SnapshotBuilder::new()
            .item("junk", "misc", json!({}), 1000.0)
            .build();
        let prices = PriceResolver::new(&db, Names::new(&db, "en"));
        let (price, best) = prices.best_trader_price("junk");
        assert_eq!(price, 0.0);
        assert_eq!(best.name, NO_TRADER);
        assert_eq!(prices.rouble_ratio(Currency::Euros), 0.0);
    }
}
