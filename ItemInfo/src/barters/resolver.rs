//! Resolving trader listings to the top-level listing that sells them
//!
//! Assortment entries form a forest: a weapon listing owns its attachment
//! listings through `parentId`, and only top-level entries (parent
//! `"hideout"`) carry the barter scheme that actually applies. To learn how
//! an item can be bought, every listing of it is walked up to its root.

use std::collections::HashSet;

use crate::database::{Assort, AssortEntry, Database, SchemeRequirement};
use crate::error::{Error, Result};
use crate::ids;
use crate::pricing::Currency;

/// Where a parent walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainWalk<'a> {
    /// Reached a top-level listing
    Root(&'a AssortEntry),
    /// The parent link was dangling or cyclic; this is the last entry reached
    Terminated(&'a AssortEntry),
}

impl<'a> ChainWalk<'a> {
    pub fn entry(&self) -> &'a AssortEntry {
        match self {
            Self::Root(entry) | Self::Terminated(entry) => entry,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root(_))
    }
}

/// Follow `parentId` links from `start` to the top-level listing.
///
/// Always terminates: a missing parent or a revisited entry ends the walk.
pub fn walk_to_root<'a>(assort: &'a Assort, start: &'a AssortEntry) -> ChainWalk<'a> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = start;

    loop {
        let parent_id = current.parent_id.as_deref();
        if parent_id == Some(ids::ASSORT_ROOT) {
            return ChainWalk::Root(current);
        }
        visited.insert(current.id.as_str());

        match parent_id.and_then(|id| assort.entry(id)) {
            Some(parent) if !visited.contains(parent.id.as_str()) => current = parent,
            Some(parent) => {
                tracing::debug!(
                    "Assortment cycle at entry {} (parent {}), stopping walk",
                    current.id,
                    parent.id
                );
                return ChainWalk::Terminated(current);
            }
            None => {
                tracing::debug!(
                    "Assortment entry {} has dangling parent {:?}, stopping walk",
                    current.id,
                    parent_id
                );
                return ChainWalk::Terminated(current);
            }
        }
    }
}

/// One requirement of a resolved barter
#[derive(Debug, Clone, PartialEq)]
pub enum BarterCost {
    Money { currency: Currency, amount: f64 },
    Item { tpl: String, count: f64 },
}

impl From<&SchemeRequirement> for BarterCost {
    fn from(requirement: &SchemeRequirement) -> Self {
        match Currency::from_tpl(&requirement.tpl) {
            Some(currency) => Self::Money {
                currency,
                amount: requirement.count,
            },
            None => Self::Item {
                tpl: requirement.tpl.clone(),
                count: requirement.count,
            },
        }
    }
}

/// A way to buy an item from a trader
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBarter {
    pub trader_id: String,
    /// The listing of the item itself
    pub entry_id: String,
    /// Listing whose scheme applies (the walk's last entry)
    pub scheme_entry_id: String,
    /// Template of the listing the item comes inside, when it is not sold on its own
    pub ancestor_tpl: Option<String>,
    pub costs: Vec<BarterCost>,
    pub loyalty_level: u32,
    /// The walk stopped before a top-level listing
    pub terminated_early: bool,
}

impl ResolvedBarter {
    /// Whether any requirement is an item rather than money
    pub fn is_barter(&self) -> bool {
        self.costs.iter().any(|c| matches!(c, BarterCost::Item { .. }))
    }

    /// Loyalty level, plus one when items are required
    pub fn rarity(&self) -> u32 {
        self.loyalty_level + u32::from(self.is_barter())
    }
}

/// Lowest rarity over all barters, 0 when there are none
pub fn overall_rarity(barters: &[ResolvedBarter]) -> u32 {
    barters.iter().map(ResolvedBarter::rarity).min().unwrap_or(0)
}

/// Every way the traders sell `item_id`, in trader priority order.
///
/// # Errors
/// Returns [`Error::BarterScheme`] when a walk ends at a listing without a
/// barter scheme.
pub fn resolve_item_barters(db: &Database, item_id: &str) -> Result<Vec<ResolvedBarter>> {
    let mut resolved = Vec::new();

    for trader in db.traders_by_priority() {
        let Some(assort) = &trader.assort else {
            continue;
        };

        for entry in assort.entries().iter().filter(|e| e.tpl == item_id) {
            let walk = walk_to_root(assort, entry);
            let terminal = walk.entry();

            let scheme = assort.scheme(&terminal.id).ok_or_else(|| Error::BarterScheme {
                trader: trader.base.id.clone(),
                entry: terminal.id.clone(),
            })?;

            let ancestor_tpl = (terminal.id != entry.id && terminal.tpl != item_id)
                .then(|| terminal.tpl.clone());

            resolved.push(ResolvedBarter {
                trader_id: trader.base.id.clone(),
                entry_id: entry.id.clone(),
                scheme_entry_id: terminal.id.clone(),
                ancestor_tpl,
                costs: scheme.iter().map(BarterCost::from).collect(),
                loyalty_level: assort.loyalty_level(&terminal.id),
                terminated_early: !walk.is_root(),
            });
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SnapshotBuilder;
    use serde_json::json;

    const GUN: &str = "gun";
    const SCOPE: &str = "scope";

    fn nested_snapshot() -> Database {
        SnapshotBuilder::new()
            .item(GUN, "weapons", json!({}), 50_000.0)
            .item(SCOPE, "sights", json!({}), 8_000.0)
            .item("bolts", "parts", json!({}), 3_000.0)
            .trader(ids::PRAPOR, "Prapor", 50.0, &[], &[])
            .listing(ids::PRAPOR, "e_gun", GUN, Some("hideout"), &[(ids::ROUBLES, 40_000.0)], 2)
            .listing(ids::PRAPOR, "e_mount", "mount", Some("e_gun"), &[], 0)
            .listing(ids::PRAPOR, "e_scope", SCOPE, Some("e_mount"), &[], 0)
            .build()
    }

    #[test]
    fn test_nested_listing_uses_root_scheme() {
        let db = nested_snapshot();
        let barters = resolve_item_barters(&db, SCOPE).unwrap();

        assert_eq!(barters.len(), 1);
        let barter = &barters[0];
        assert_eq!(barter.scheme_entry_id, "e_gun");
        assert_eq!(barter.ancestor_tpl.as_deref(), Some(GUN));
        assert_eq!(barter.loyalty_level, 2);
        assert!(!barter.terminated_early);
        assert_eq!(barter.rarity(), 2);
        assert_eq!(overall_rarity(&barters), 2);
    }

    #[test]
    fn test_top_level_listing_has_no_ancestor() {
        let db = nested_snapshot();
        let barters = resolve_item_barters(&db, GUN).unwrap();
        assert_eq!(barters.len(), 1);
        assert_eq!(barters[0].ancestor_tpl, None);
        assert_eq!(
            barters[0].costs,
            vec![BarterCost::Money { currency: Currency::Roubles, amount: 40_000.0 }]
        );
    }

    #[test]
    fn test_dangling_parent_terminates_at_break() {
        let db = SnapshotBuilder::new()
            .item(SCOPE, "sights", json!({}), 8_000.0)
            .trader(ids::PRAPOR, "Prapor", 50.0, &[], &[])
            .listing(ids::PRAPOR, "e_scope", SCOPE, Some("gone"), &[("bolts", 2.0)], 1)
            .build();

        let barters = resolve_item_barters(&db, SCOPE).unwrap();
        assert_eq!(barters.len(), 1);
        assert!(barters[0].terminated_early);
        assert_eq!(barters[0].scheme_entry_id, "e_scope");
        assert_eq!(barters[0].ancestor_tpl, None);
        assert_eq!(barters[0].rarity(), 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let db = SnapshotBuilder::new()
            .item(SCOPE, "sights", json!({}), 8_000.0)
            .trader(ids::PRAPOR, "Prapor", 50.0, &[], &[])
            .listing(ids::PRAPOR, "a", SCOPE, Some("b"), &[(ids::ROUBLES, 1.0)], 1)
            .listing(ids::PRAPOR, "b", "box", Some("a"), &[(ids::ROUBLES, 1.0)], 1)
            .build();

        let assort = db.traders[ids::PRAPOR].assort.as_ref().unwrap();
        let walk = walk_to_root(assort, assort.entry("a").unwrap());
        assert!(!walk.is_root());
        assert_eq!(walk.entry().id, "b");

        let barters = resolve_item_barters(&db, SCOPE).unwrap();
        assert_eq!(barters[0].ancestor_tpl.as_deref(), Some("box"));
    }

    #[test]
    fn test_missing_scheme_is_an_error() {
        let db = SnapshotBuilder::new()
            .item(GUN, "weapons", json!({}), 50_000.0)
            .trader(ids::PRAPOR, "Prapor", 50.0, &[], &[])
            .listing(ids::PRAPOR, "e_gun", GUN, Some("hideout"), &[], 1)
            .build();

        let err = resolve_item_barters(&db, GUN).unwrap_err();
        assert!(matches!(err, Error::BarterScheme { entry, .. } if entry == "e_gun"));
    }

    #[test]
    fn test_traders_in_priority_order() {
        let db = SnapshotBuilder::new()
            .item(GUN, "weapons", json!({}), 50_000.0)
            .trader(ids::PRAPOR, "Prapor", 50.0, &[], &[])
            .trader(ids::THERAPIST, "Therapist", 37.0, &[], &[])
            .listing(ids::PRAPOR, "p", GUN, Some("hideout"), &[(ids::ROUBLES, 1.0)], 1)
            .listing(ids::THERAPIST, "t", GUN, Some("hideout"), &[(ids::DOLLARS, 1.0)], 3)
            .build();

        let barters = resolve_item_barters(&db, GUN).unwrap();
        let traders: Vec<_> = barters.iter().map(|b| b.trader_id.as_str()).collect();
        assert_eq!(traders, [ids::THERAPIST, ids::PRAPOR]);
        assert_eq!(overall_rarity(&barters), 1);
        assert_eq!(overall_rarity(&[]), 0);
    }
}
