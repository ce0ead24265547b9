//! CLI command for previewing one item's text

use std::path::Path;

use super::SettingsArgs;
use super::apply::load_enricher;
use crate::database::load_dir;
use crate::enrich::commit;
use crate::error::Error;
use crate::locale::ItemField;

pub fn execute(source: &Path, item_id: &str, lang: Option<&str>, settings: &SettingsArgs) -> anyhow::Result<()> {
    let enricher = load_enricher(settings)?;
    let mut db = load_dir(source)?;
    let prepared = enricher.prepare_language();

    let lang = lang.unwrap_or(&prepared.language).to_string();
    if !db.locales.contains_language(&lang) {
        return Err(Error::LocaleNotLoaded(lang).into());
    }
    if !db.is_real_item(item_id) {
        anyhow::bail!("Not an enrichable item: {}", item_id);
    }

    let Some(plan) = enricher.planner(&db, &prepared).plan(item_id) else {
        anyhow::bail!("Item not found: {}", item_id);
    };

    println!("Item:       {item_id} ({:?})", plan.class);
    println!(
        "Tier:       {} ({})",
        plan.tier.color_index, plan.background_color
    );
    if plan.barter_rarity > 0 {
        println!("Barter:     rarity {}", plan.barter_rarity);
    }
    if let Some(rarity) = plan.crafting_rarity {
        println!("Crafting:   rarity {rarity}");
    }
    if plan.barter_failed {
        println!("Barter resolution failed, see the log");
    }

    commit(&mut db, &plan);
    let props = db.items.get(item_id).map(|item| &item.props);
    for field in [ItemField::Name, ItemField::ShortName, ItemField::Description] {
        let text = db
            .locales
            .item_text(&lang, item_id, field, props)
            .unwrap_or_default();
        println!("\n[{field:?}]\n{text}");
    }

    Ok(())
}
