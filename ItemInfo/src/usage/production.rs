//! Recipes that produce an item

use super::RecipeParts;
use crate::context::Context;
use crate::database::{Database, ProductionRecipe};
use crate::ids;
use crate::locale::Phrase;
use crate::text::number;

/// Rendered production lines and the easiest area level that crafts the item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionSummary {
    pub text: String,
    /// `None` when no recipe names an area requirement
    pub rarity: Option<u32>,
}

/// Rarity of a recipe gated on `area_type` at `level`:
/// `level + 1` for upgradable areas, 4 for single-stage ones.
pub fn crafting_rarity(db: &Database, area_type: i64, level: u32) -> u32 {
    match db.area(area_type) {
        Some(area) if area.is_multi_stage() => level + 1,
        _ => 4,
    }
}

/// Every recipe producing `item_id`, except seasonal ones.
///
/// The boosted product shows production times for several booster counts;
/// everything else shows its parts and the cost per produced unit.
pub fn production_info(ctx: &Context<'_>, item_id: &str) -> ProductionSummary {
    let mut summary = ProductionSummary::default();

    for recipe in ctx
        .db
        .hideout
        .production
        .iter()
        .filter(|r| r.end_product == item_id && r.area_type != ids::SEASONAL_AREA)
    {
        if let Some((area_type, level)) = recipe.area_requirement() {
            let rarity = crafting_rarity(ctx.db, area_type, level);
            summary.rarity = Some(summary.rarity.map_or(rarity, |r| r.min(rarity)));
        }

        let parts = RecipeParts::collect(ctx, recipe, None);
        let area = parts
            .area
            .clone()
            .unwrap_or_else(|| ctx.names.area_name(recipe.area_type));

        if recipe.end_product == ids::BOOSTED_PRODUCT {
            summary.text.push_str(&boosted_line(ctx, recipe, &area));
            continue;
        }

        let per_item = if recipe.count > 1.0 {
            format!(" {}", ctx.phrase(Phrase::PerItem))
        } else {
            String::new()
        };
        summary.text.push_str(&format!(
            "{} ×{} @ {}{} < {} | Σ{} ≈ {}₽\n",
            ctx.phrase(Phrase::Crafted),
            number(recipe.count),
            area,
            parts.quest.unwrap_or_default(),
            parts.parts.join(" + "),
            per_item,
            ctx.price(parts.cost / recipe.count)
        ));
    }

    summary
}

fn boosted_line(ctx: &Context<'_>, recipe: &ProductionRecipe, area: &str) -> String {
    let rate = ctx.db.hideout.settings.gpu_boost_rate;
    let previews: Vec<String> = ids::BOOST_PREVIEWS
        .iter()
        .map(|&boosters| {
            let time = recipe.production_time / (1.0 + f64::from(boosters - 1) * rate);
            format!("{boosters}× GPU: {}", ctx.names.duration(time))
        })
        .collect();

    format!(
        "{} @ {} | {}\n",
        ctx.phrase(Phrase::Crafted),
        area,
        previews.join(", ")
    )
}
