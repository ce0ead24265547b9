//! Reverse lookups: where an item is produced, crafted with, built into and handed in
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod crafting;
pub mod hideout;
pub mod production;
pub mod quests;

pub use crafting::crafting_info;
pub use hideout::hideout_info;
pub use production::{ProductionSummary, crafting_rarity, production_info};
pub use quests::{QuestSummary, quest_info};

use crate::context::Context;
use crate::database::{ProductionRecipe, Requirement};
use crate::locale::Phrase;
use crate::text::{number, round_half_up};

/// Fraction of an item's resource capacity a requirement uses.
///
/// Items without a capacity count as zero consumption.
pub fn resource_share(ctx: &Context<'_>, tpl: &str, resource: f64) -> f64 {
    let capacity = ctx
        .db
        .items
        .get(tpl)
        .and_then(|item| item.props.resource)
        .unwrap_or(0.0);
    if capacity > 0.0 { resource / capacity } else { 0.0 }
}

/// Priced, rendered requirements of one recipe
#[derive(Debug, Clone, Default)]
struct RecipeParts {
    /// `<area> lv<L>` from the area requirement
    area: Option<String>,
    /// Quest unlocking the recipe
    quest: Option<String>,
    /// Rendered item and resource requirements, minus the excluded item
    parts: Vec<String>,
    /// Flea value of every consumed item and resource
    cost: f64,
}

impl RecipeParts {
    fn collect(ctx: &Context<'_>, recipe: &ProductionRecipe, exclude: Option<&str>) -> Self {
        let mut out = Self::default();

        for requirement in &recipe.requirements {
            match requirement {
                Requirement::Area {
                    area_type,
                    required_level,
                } => out.area = Some(ctx.area_level(*area_type, *required_level)),
                Requirement::Item { template_id, count } => {
                    out.cost += ctx.prices.flea_price(template_id) * count;
                    if exclude != Some(template_id.as_str()) {
                        out.parts.push(format!(
                            "{} ×{}",
                            ctx.names.item_short_name(template_id),
                            number(*count)
                        ));
                    }
                }
                Requirement::Resource {
                    template_id,
                    resource,
                } => {
                    let share = resource_share(ctx, template_id, *resource);
                    out.cost += round_half_up(ctx.prices.flea_price(template_id) * share);
                    if exclude != Some(template_id.as_str()) {
                        out.parts.push(format!(
                            "{} ×{}%",
                            ctx.names.item_short_name(template_id),
                            number(round_half_up(share * 100.0))
                        ));
                    }
                }
                Requirement::QuestComplete { quest_id } => {
                    out.quest = Some(format!(" ({}✔)", ctx.names.quest_name(quest_id)));
                }
                Requirement::Tool { .. } | Requirement::Other => {}
            }
        }

        out
    }
}

/// `Part ×<n>` / `Tool` / `Part ×<n>%` for the requirement naming the item
fn role(ctx: &Context<'_>, requirement: &Requirement) -> String {
    match requirement {
        Requirement::Tool { .. } => ctx.phrase(Phrase::Tool).to_string(),
        Requirement::Resource {
            template_id,
            resource,
        } => format!(
            "{} ×{}%",
            ctx.phrase(Phrase::Part),
            number(round_half_up(resource_share(ctx, template_id, *resource) * 100.0))
        ),
        _ => format!(
            "{} ×{}",
            ctx.phrase(Phrase::Part),
            number(requirement.count().unwrap_or(1.0))
        ),
    }
}
