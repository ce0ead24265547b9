//! Quest hand-ins that take an item

use crate::context::Context;
use crate::locale::Phrase;
use crate::text::number;

/// Rendered hand-in lines, and whether any of them requires found-in-raid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestSummary {
    pub text: String,
    pub found_in_raid: bool,
}

/// `Found [(✔) ]×<count> > <quest> @ <trader>`, one line per hand-in condition
pub fn quest_info(ctx: &Context<'_>, item_id: &str) -> QuestSummary {
    let mut summary = QuestSummary::default();

    for (quest_id, quest) in &ctx.db.quests {
        for condition in quest.handovers(item_id) {
            summary.found_in_raid |= condition.only_found_in_raid;
            summary.text.push_str(&format!(
                "{} {}×{} > {} @ {}\n",
                ctx.phrase(Phrase::Found),
                if condition.only_found_in_raid { "(✔) " } else { "" },
                number(condition.value),
                ctx.names.quest_name(quest_id),
                ctx.names.trader_name(&quest.trader_id)
            ));
        }
    }

    summary
}
