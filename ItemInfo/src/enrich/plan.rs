//! Per-item edit plans
//!
//! A plan is computed from a read-only view of the snapshot and records every
//! text fragment and the background color for one item, in the order they
//! must be applied. Committing it is the orchestrator's job.

use crate::barters::{BarterSummary, barter_info, barter_resource_info, resolve_item_barters};
use crate::config::{Config, KeyMaps};
use crate::context::Context;
use crate::database::{ItemClass, TemplateItem};
use crate::locale::{ItemField, Placement};
use crate::pricing::{SlotValue, slot_value};
use crate::text::blocks::{PriceLine, armor_block, headset_block, price_block, slot_efficiency_block};
use crate::text::tags::{ArmorRating, ContainerCapacity, GearPlates, attachment_tag, bullet_stats, tier_code};
use crate::text::{DescriptionSuffix, SectionTitle, section};
use crate::tiers::{Tier, TierScale, TierTable, classify};
use crate::usage::{crafting_info, hideout_info, production_info, quest_info};

/// Source label of the flea market price line
const FLEA_SOURCE: &str = "Flea";

/// One fragment composed into an item text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub field: ItemField,
    pub placement: Placement,
    pub text: String,
}

/// Everything the pass will change for one item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPlan {
    pub item_id: String,
    pub class: ItemClass,
    pub tier: Tier,
    pub background_color: String,
    /// Applied in order
    pub edits: Vec<TextEdit>,
    /// Lowest barter rarity, 0 when the item cannot be bought
    pub barter_rarity: u32,
    /// Lowest crafting rarity, when production info ran and found an area
    pub crafting_rarity: Option<u32>,
    /// Barter resolution failed and the barter section was left empty
    pub barter_failed: bool,
}

impl ItemPlan {
    fn edit(&mut self, field: ItemField, placement: Placement, text: impl Into<String>) {
        self.edits.push(TextEdit {
            field,
            placement,
            text: text.into(),
        });
    }

    fn name(&mut self, placement: Placement, text: &str) {
        self.edit(ItemField::Name, placement, text);
    }

    /// The same fragment on the name and the short name
    fn both_names(&mut self, placement: Placement, text: &str) {
        self.edit(ItemField::Name, placement, text);
        self.edit(ItemField::ShortName, placement, text);
    }
}

/// Computes [`ItemPlan`]s against one context and settings set
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    pub ctx: Context<'a>,
    pub config: &'a Config,
    pub tiers: &'a TierTable,
    pub keys: &'a KeyMaps,
}

impl Planner<'_> {
    /// Plan one item; `None` when the id is not in the item table.
    pub fn plan(&self, item_id: &str) -> Option<ItemPlan> {
        let ctx = &self.ctx;
        let item = ctx.db.items.get(item_id)?;
        let class = ItemClass::of(item, &ctx.db.items);

        // Unrounded; `PriceLine` rounds when it renders
        let flea = ctx.prices.flea_price(item_id);
        let (trader, best_trader) = ctx.prices.best_trader_price(item_id);
        let flea_value = slot_value(item, flea);
        let trader_value = slot_value(item, trader);

        let (barters, barter_failed) = match resolve_item_barters(ctx.db, item_id) {
            Ok(resolved) => (barter_info(ctx, &resolved), false),
            Err(e) => {
                tracing::warn!("Barter resolution failed for {}: {}", item_id, e);
                (BarterSummary::default(), true)
            }
        };

        let tier = self.tier(item, class, flea, flea_value);
        let mut plan = ItemPlan {
            item_id: item_id.to_string(),
            class,
            tier,
            background_color: self.tiers.color(tier).to_string(),
            edits: Vec::new(),
            barter_rarity: barters.rarity,
            crafting_rarity: None,
            barter_failed,
        };
        let mut suffix = DescriptionSuffix::default();

        self.name_tags(&mut plan, item, class);

        if self.config.container_info.enabled
            && let Some(capacity) = ContainerCapacity::of(item)
        {
            suffix.slot_efficiency = slot_efficiency_block(ctx, &capacity);
            plan.name(Placement::Prepend, &capacity.name_prefix());
            plan.name(Placement::Append, &capacity.name_suffix());
            plan.edit(ItemField::ShortName, Placement::Prepend, capacity.short_name_prefix());
        }

        if self.config.armor_info.enabled
            && let Some(rating) = ArmorRating::of(&item.props, &ctx.db.armor_materials)
        {
            suffix.armor = armor_block(ctx, &rating, self.config.armor_info.add_armor_class_info);
            plan.name(Placement::Prepend, &rating.name_prefix());
            plan.name(Placement::Append, &rating.name_suffix());
            plan.edit(ItemField::ShortName, Placement::Prepend, rating.name_prefix());
        }

        if class.is_armored_gear()
            && let Some((prefix, material)) =
                GearPlates::of(item, class, &ctx.db.items, &ctx.db.armor_materials).tags()
        {
            plan.name(Placement::Prepend, &prefix);
            plan.name(Placement::Append, &material);
            plan.edit(ItemField::ShortName, Placement::Prepend, prefix);
        }

        if let Some(tag) = attachment_tag(class, &item.props) {
            plan.both_names(Placement::Prepend, &tag);
        }

        let prices = if self.config.prices_info.enabled {
            let flea_line = (self.config.prices_info.add_flea_price && flea > 0.0).then_some(PriceLine {
                price: flea,
                value: flea_value,
                source: FLEA_SOURCE,
            });
            let trader_line = PriceLine {
                price: trader,
                value: trader_value,
                source: &best_trader.name,
            };
            price_block(ctx, flea_line, trader_line)
        } else {
            String::new()
        };

        if self.config.headset_info.enabled {
            suffix.headset = headset_block(ctx, &item.props).unwrap_or_default();
        }
        if self.config.barter_info.enabled {
            suffix.barter_for = section(SectionTitle::BarterFor, &barters.text);
        }
        if self.config.barter_resource_info.enabled {
            suffix.barter_with = section(SectionTitle::BarterWith, &barter_resource_info(ctx, item_id));
        }
        if self.config.production_info.enabled {
            let production = production_info(ctx, item_id);
            suffix.production = section(SectionTitle::Production, &production.text);
            plan.crafting_rarity = production.rarity;
        }
        if self.config.quest_info.enabled {
            let quests = quest_info(ctx, item_id);
            suffix.quests = section(SectionTitle::Quests, &quests.text);
            if self.config.quest_info.fir_in_name && quests.found_in_raid {
                plan.name(Placement::Append, "✔");
            }
        }
        if self.config.hideout_info.enabled {
            suffix.hideout = section(SectionTitle::Hideout, &hideout_info(ctx, item_id));
        }
        if self.config.crafting_material_info.enabled {
            suffix.crafting = section(SectionTitle::Crafting, &crafting_info(ctx, item_id));
        }

        plan.edit(ItemField::Description, Placement::Prepend, prices);
        plan.edit(ItemField::Description, Placement::Append, suffix.render());

        Some(plan)
    }

    /// Keys by flea price, ammo by penetration, everything else by flea value per slot
    fn tier(&self, item: &TemplateItem, class: ItemClass, flea: f64, flea_value: SlotValue) -> Tier {
        match class {
            ItemClass::Key => classify(flea, &self.tiers.key_scale()),
            ItemClass::Ammo | ItemClass::AmmoBox => {
                let penetration = self
                    .ammo_props(item, class)
                    .and_then(|ammo| ammo.props.penetration_power)
                    .unwrap_or(0.0);
                classify(penetration, &TierScale::ammo())
            }
            _ => classify(flea_value.per_slot, &self.tiers.item_scale()),
        }
    }

    /// The ammo template: the item itself, or the round an ammo box holds
    fn ammo_props<'i>(&'i self, item: &'i TemplateItem, class: ItemClass) -> Option<&'i TemplateItem> {
        match class {
            ItemClass::Ammo => Some(item),
            ItemClass::AmmoBox => item
                .props
                .stack_slots
                .as_ref()
                .and_then(|slots| slots.first())
                .and_then(|slot| slot.first_filter())
                .and_then(|ammo| self.ctx.db.items.get(ammo)),
            _ => None,
        }
    }

    /// Bullet stats, tier code and key map tag, in that order
    fn name_tags(&self, plan: &mut ItemPlan, item: &TemplateItem, class: ItemClass) {
        if self.config.bullet_stats_in_name.enabled
            && let Some(ammo) = self.ammo_props(item, class)
        {
            plan.name(Placement::Append, &bullet_stats(&ammo.props));
        }

        if let Some(code) = self.tiers.code(plan.tier) {
            plan.both_names(Placement::Append, &tier_code(code));
        }

        if class == ItemClass::Key && self.config.key_map_labels.enabled {
            plan.both_names(Placement::Prepend, &self.keys.tag_for(&item.id));
        }
    }
}
