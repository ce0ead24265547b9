//! Hideout construction stages that need an item

use crate::context::Context;
use crate::locale::Phrase;
use crate::text::number;

/// `Need ×<count> > <area> lv<stage>`, one line per stage requirement naming the item
pub fn hideout_info(ctx: &Context<'_>, item_id: &str) -> String {
    let mut text = String::new();

    for area in &ctx.db.hideout.areas {
        for (stage, details) in &area.stages {
            for requirement in details
                .requirements
                .iter()
                .filter(|r| r.template_id() == Some(item_id))
            {
                text.push_str(&format!(
                    "{} ×{} > {} {}{}\n",
                    ctx.phrase(Phrase::Need),
                    number(requirement.count().unwrap_or(1.0)),
                    ctx.names.area_name(area.area_type),
                    ctx.phrase(Phrase::Lv),
                    stage
                ));
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Translations;
    use crate::testing::SnapshotBuilder;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stage_requirements() {
        let db = SnapshotBuilder::new()
            .item("bolts", "parts", json!({}), 3_000.0)
            .item("screwdriver", "tools", json!({}), 3_000.0)
            .locale("en", "hideout_area_10_name", "Workbench")
            .area(json!({
                "_id": "a10", "type": 10,
                "stages": {
                    "0": { "requirements": [] },
                    "1": { "requirements": [
                        { "type": "Item", "templateId": "bolts", "count": 5 },
                        { "type": "Tool", "templateId": "screwdriver" }
                    ] },
                    "2": { "requirements": [
                        { "type": "Item", "templateId": "bolts", "count": 10 },
                        { "type": "TraderLoyalty", "traderId": "t", "loyaltyLevel": 2 }
                    ] }
                }
            }))
            .build();
        let translations = Translations::bundled().unwrap();
        let ctx = Context::new(&db, "en", &translations, true);

        assert_eq!(
            hideout_info(&ctx, "bolts"),
            "Need ×5 > Workbench lv1\nNeed ×10 > Workbench lv2\n"
        );
        assert_eq!(hideout_info(&ctx, "screwdriver"), "Need ×1 > Workbench lv1\n");
        assert_eq!(hideout_info(&ctx, "nothing"), "");
    }
}
