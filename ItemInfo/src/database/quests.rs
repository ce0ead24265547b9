//! Quest templates (only the parts item hand-ins need)

use serde::{Deserialize, Serialize};

use super::lenient_number_or_zero;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "traderId", default)]
    pub trader_id: String,
    #[serde(default)]
    pub conditions: QuestConditions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestConditions {
    #[serde(rename = "AvailableForFinish", default)]
    pub available_for_finish: Vec<QuestCondition>,
}

/// A finish condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestCondition {
    #[serde(rename = "conditionType", default)]
    pub condition_type: String,
    #[serde(default)]
    pub target: Target,
    #[serde(default, deserialize_with = "lenient_number_or_zero")]
    pub value: f64,
    #[serde(rename = "onlyFoundInRaid", default)]
    pub only_found_in_raid: bool,
}

/// Condition target: a single id or a list of ids
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    One(String),
    Many(Vec<String>),
}

impl Default for Target {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl Target {
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Self::One(target) => target == id,
            Self::Many(targets) => targets.iter().any(|t| t == id),
        }
    }
}

impl QuestCondition {
    /// Whether this is an item hand-in naming `item_id`
    pub fn hands_in(&self, item_id: &str) -> bool {
        self.condition_type == "HandoverItem" && self.target.contains(item_id)
    }
}

impl Quest {
    /// Hand-in conditions naming the item
    pub fn handovers<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a QuestCondition> {
        self.conditions
            .available_for_finish
            .iter()
            .filter(move |c| c.hands_in(item_id))
    }
}
