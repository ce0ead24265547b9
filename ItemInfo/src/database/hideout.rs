//! Hideout areas, production recipes and settings

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient_number, lenient_number_or_zero, skip_malformed};

/// The hideout tables the enrichment pass reads
#[derive(Debug, Clone, Default)]
pub struct Hideout {
    pub areas: Vec<HideoutArea>,
    pub production: Vec<ProductionRecipe>,
    pub settings: HideoutSettings,
}

/// A requirement of a recipe or an area stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Requirement {
    /// Hideout area at a minimum level
    Area {
        #[serde(rename = "areaType")]
        area_type: i64,
        #[serde(rename = "requiredLevel", default, deserialize_with = "lenient_level")]
        required_level: u32,
    },
    /// Whole items, consumed
    Item {
        #[serde(rename = "templateId")]
        template_id: String,
        #[serde(default, deserialize_with = "lenient_number_or_zero")]
        count: f64,
    },
    /// A fraction of an item's resource capacity
    Resource {
        #[serde(rename = "templateId")]
        template_id: String,
        #[serde(default, deserialize_with = "lenient_number_or_zero")]
        resource: f64,
    },
    /// An item that must be present but is not consumed
    Tool {
        #[serde(rename = "templateId")]
        template_id: String,
    },
    QuestComplete {
        #[serde(rename = "questId")]
        quest_id: String,
    },
    /// Trader loyalty, skills and other kinds we never render
    #[serde(other)]
    Other,
}

fn lenient_level<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.map_or(0, |level| level.max(0.0) as u32))
}

impl Requirement {
    /// Item template the requirement refers to, if any
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::Item { template_id, .. }
            | Self::Resource { template_id, .. }
            | Self::Tool { template_id } => Some(template_id),
            _ => None,
        }
    }

    /// Item count for item requirements
    pub fn count(&self) -> Option<f64> {
        match self {
            Self::Item { count, .. } => Some(*count),
            _ => None,
        }
    }
}

/// One hideout production recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecipe {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "areaType", default)]
    pub area_type: i64,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Production time in seconds
    #[serde(rename = "productionTime", default, deserialize_with = "lenient_number_or_zero")]
    pub production_time: f64,
    #[serde(rename = "endProduct")]
    pub end_product: String,
    /// Yield per run
    #[serde(default = "default_yield", deserialize_with = "lenient_yield")]
    pub count: f64,
}

fn default_yield() -> f64 {
    1.0
}

fn lenient_yield<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.filter(|c| *c > 0.0).unwrap_or(1.0))
}

impl ProductionRecipe {
    /// The `Area` requirement gating the recipe
    pub fn area_requirement(&self) -> Option<(i64, u32)> {
        self.requirements.iter().find_map(|r| match r {
            Requirement::Area {
                area_type,
                required_level,
            } => Some((*area_type, *required_level)),
            _ => None,
        })
    }

    /// Quest that must be completed to unlock the recipe
    pub fn quest_requirement(&self) -> Option<&str> {
        self.requirements.iter().find_map(|r| match r {
            Requirement::QuestComplete { quest_id } => Some(quest_id.as_str()),
            _ => None,
        })
    }
}

/// A hideout area with its construction stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HideoutArea {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "type")]
    pub area_type: i64,
    /// Stages keyed by level ("0", "1", ...)
    #[serde(default, deserialize_with = "lenient_stages")]
    pub stages: IndexMap<String, AreaStage>,
}

fn lenient_stages<'de, D>(deserializer: D) -> Result<IndexMap<String, AreaStage>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(level, value)| match serde_json::from_value(value) {
            Ok(stage) => Some((level, stage)),
            Err(err) => {
                tracing::warn!("Skipping malformed hideout stage {}: {}", level, err);
                None
            }
        })
        .collect())
}

impl HideoutArea {
    /// Whether the area can be upgraded past its first level
    pub fn is_multi_stage(&self) -> bool {
        self.stages.len() > 2
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaStage {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HideoutSettings {
    /// Production speed added per extra booster for the boosted product
    #[serde(rename = "gpuBoostRate", default, deserialize_with = "lenient_number_or_zero")]
    pub gpu_boost_rate: f64,
}

/// Production table on disk: a bare list or `{ "recipes": [...] }`
///
/// Recipes are kept raw until conversion so a malformed one is skipped on
/// its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductionFile {
    List(Vec<Value>),
    Wrapped { recipes: Vec<Value> },
}

impl From<ProductionFile> for Vec<ProductionRecipe> {
    fn from(file: ProductionFile) -> Self {
        match file {
            ProductionFile::List(recipes) | ProductionFile::Wrapped { recipes } => {
                skip_malformed(recipes, "production recipe")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_kinds() {
        let recipe: ProductionRecipe = serde_json::from_str(
            r#"{ "_id": "r", "areaType": 10, "productionTime": 3600, "endProduct": "out", "count": 2,
                 "requirements": [
                    { "type": "Area", "areaType": 10, "requiredLevel": 2 },
                    { "type": "Item", "templateId": "bolts", "count": 3, "isFunctional": false },
                    { "type": "Resource", "templateId": "fuel", "resource": 50 },
                    { "type": "Tool", "templateId": "multitool" },
                    { "type": "QuestComplete", "questId": "q1" },
                    { "type": "Skill", "skillName": "Crafting", "skillLevel": 3 }
                 ] }"#,
        )
        .unwrap();

        assert_eq!(recipe.area_requirement(), Some((10, 2)));
        assert_eq!(recipe.quest_requirement(), Some("q1"));
        assert_eq!(recipe.requirements[1].count(), Some(3.0));
        assert_eq!(recipe.requirements[3].template_id(), Some("multitool"));
        assert_eq!(recipe.requirements[5], Requirement::Other);
        assert_eq!(recipe.count, 2.0);
    }

    #[test]
    fn test_production_file_shapes() {
        let wrapped: ProductionFile =
            serde_json::from_str(r#"{ "recipes": [{ "endProduct": "a" }] }"#).unwrap();
        let list: ProductionFile = serde_json::from_str(r#"[{ "endProduct": "b" }]"#).unwrap();

        let wrapped: Vec<ProductionRecipe> = wrapped.into();
        let list: Vec<ProductionRecipe> = list.into();
        assert_eq!(wrapped[0].end_product, "a");
        assert_eq!(wrapped[0].count, 1.0);
        assert_eq!(list[0].end_product, "b");
    }

    #[test]
    fn test_malformed_recipe_is_skipped_alone() {
        let file: ProductionFile = serde_json::from_str(
            r#"[
                { "_id": "a", "endProduct": "out_a",
                  "requirements": [{ "type": "Area", "areaType": 10, "requiredLevel": "2" }] },
                { "_id": "b", "requirements": [] },
                { "_id": "c", "endProduct": "out_c", "requirements": [{ "type": "Item", "count": 1 }] },
                { "_id": "d", "endProduct": "out_d" }
            ]"#,
        )
        .unwrap();

        let recipes: Vec<ProductionRecipe> = file.into();
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(recipes[0].area_requirement(), Some((10, 2)));
    }

    #[test]
    fn test_malformed_stage_is_skipped_alone() {
        let area: HideoutArea = serde_json::from_str(
            r#"{ "_id": "gen", "type": 4, "stages": {
                "0": { "requirements": [] },
                "1": { "requirements": [{ "type": "Area", "areaType": 3, "requiredLevel": "1" }] },
                "2": { "requirements": "none" }
            } }"#,
        )
        .unwrap();

        assert_eq!(area.stages.len(), 2);
        assert_eq!(
            area.stages["1"].requirements[0],
            Requirement::Area { area_type: 3, required_level: 1 }
        );
    }
}
