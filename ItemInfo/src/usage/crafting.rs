//! Recipes that consume an item

use super::{RecipeParts, role};
use crate::context::Context;
use crate::text::number;

/// One line per recipe requirement naming the item:
/// `<role> > <product> ×<yield> @ <area> lv<L>[ (<quest>✔) ] < … + <other parts> | Δ ≈ <profit>₽`
///
/// Profit is the product's flea value times the yield, minus the flea value
/// of every consumed item and resource share.
pub fn crafting_info(ctx: &Context<'_>, item_id: &str) -> String {
    let mut text = String::new();

    for recipe in &ctx.db.hideout.production {
        for requirement in recipe
            .requirements
            .iter()
            .filter(|r| r.template_id() == Some(item_id))
        {
            let parts = RecipeParts::collect(ctx, recipe, Some(item_id));
            let profit = ctx.prices.flea_price(&recipe.end_product) * recipe.count - parts.cost;

            let mut line = format!(
                "{} > {} ×{} @ {}{} < …",
                role(ctx, requirement),
                ctx.names.item_name(&recipe.end_product),
                number(recipe.count),
                parts.area.unwrap_or_default(),
                parts.quest.map(|q| q + " ").unwrap_or_default()
            );
            for part in &parts.parts {
                line.push_str(" + ");
                line.push_str(part);
            }
            line.push_str(&format!(" | Δ ≈ {}₽\n", ctx.price(profit)));
            text.push_str(&line);
        }
    }

    text
}
