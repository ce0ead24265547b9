//! Barter text: how an item is bought, and which trades consume it

use super::resolver::{BarterCost, ResolvedBarter, overall_rarity};
use crate::context::Context;
use crate::locale::Phrase;
use crate::pricing::Currency;
use crate::text::number;

/// Rendered "bought at" lines plus the item's barter rarity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarterSummary {
    pub text: String,
    pub rarity: u32,
}

/// `Bought[ ∈ <container>] at <trader> lv<L> < <cost> + ... [| Σ ≈ <total>₽]`, one line per barter
pub fn barter_info(ctx: &Context<'_>, barters: &[ResolvedBarter]) -> BarterSummary {
    let mut text = String::new();

    for barter in barters {
        let part_of = barter
            .ancestor_tpl
            .as_deref()
            .map(|tpl| format!(" ∈ {}", ctx.names.item_short_name(tpl)))
            .unwrap_or_default();

        let mut item_value = 0.0;
        let costs: Vec<String> = barter
            .costs
            .iter()
            .map(|cost| match cost {
                BarterCost::Money { currency, amount } => money(ctx, *currency, *amount),
                BarterCost::Item { tpl, count } => {
                    item_value += ctx.prices.flea_price(tpl) * count;
                    format!("{} ×{}", ctx.names.item_short_name(tpl), number(*count))
                }
            })
            .collect();

        let total = if item_value == 0.0 {
            String::new()
        } else {
            format!(" | Σ ≈ {}₽", ctx.price(item_value))
        };

        text.push_str(&format!(
            "{}{} {} {} < {}{}\n",
            ctx.phrase(Phrase::Bought),
            part_of,
            ctx.phrase(Phrase::At),
            ctx.trader_level(&barter.trader_id, barter.loyalty_level),
            costs.join(" + "),
            total
        ));
    }

    BarterSummary {
        text,
        rarity: overall_rarity(barters),
    }
}

fn money(ctx: &Context<'_>, currency: Currency, amount: f64) -> String {
    let roubles = ctx.price(ctx.prices.rouble_ratio(currency) * amount);
    match currency {
        Currency::Roubles => format!("{}₽", ctx.price(amount)),
        Currency::Euros => format!("{}€ ≈ {}₽", ctx.price(amount), roubles),
        Currency::Dollars => format!("${} ≈ {}₽", ctx.price(amount), roubles),
    }
}

/// Trades that take `item_id` as payment:
/// `Traded ×<n> at <trader> lv<L> > <item> < … + <other costs> | Δ ≈ <profit>₽`
pub fn barter_resource_info(ctx: &Context<'_>, item_id: &str) -> String {
    let mut text = String::new();

    for trader in ctx.db.traders_by_priority() {
        let Some(assort) = &trader.assort else {
            continue;
        };

        for (entry_id, scheme) in assort.schemes() {
            let Some(bought) = assort.entry(entry_id).map(|e| e.tpl.as_str()) else {
                continue;
            };
            let total: f64 = scheme
                .iter()
                .map(|r| ctx.prices.flea_price(&r.tpl) * r.count)
                .sum();

            for used in scheme.iter().filter(|r| r.tpl == item_id) {
                let mut line = format!(
                    "{} ×{} {} {} > {} < …",
                    ctx.phrase(Phrase::Traded),
                    number(used.count),
                    ctx.phrase(Phrase::At),
                    ctx.trader_level(&trader.base.id, assort.loyalty_level(entry_id)),
                    ctx.names.item_name(bought)
                );
                for other in scheme.iter().filter(|r| r.tpl != item_id) {
                    line.push_str(&format!(
                        " + {} ×{}",
                        ctx.names.item_short_name(&other.tpl),
                        number(other.count)
                    ));
                }
                if total != 0.0 {
                    line.push_str(&format!(
                        " | Δ ≈ {}₽",
                        ctx.price(ctx.prices.flea_price(bought) - total)
                    ));
                }
                text.push_str(&line);
                text.push('\n');
            }
        }
    }

    text
}
