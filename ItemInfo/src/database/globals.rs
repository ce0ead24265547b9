//! Armor material globals

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::lenient_number_or_zero;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArmorMaterial {
    #[serde(rename = "Destructibility", default, deserialize_with = "lenient_number_or_zero")]
    pub destructibility: f64,
    #[serde(rename = "MinRepairDegradation", default, deserialize_with = "lenient_number_or_zero")]
    pub min_repair_degradation: f64,
    #[serde(rename = "MaxRepairDegradation", default, deserialize_with = "lenient_number_or_zero")]
    pub max_repair_degradation: f64,
}

impl ArmorMaterial {
    /// Durability points a fresh piece effectively absorbs.
    ///
    /// A zero destructibility yields infinity, which renders as such.
    pub fn effective_durability(&self, max_durability: f64) -> f64 {
        max_durability / self.destructibility
    }
}

/// `globals.json`, reduced to `config.ArmorMaterials`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GlobalsFile {
    #[serde(default)]
    pub config: GlobalsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GlobalsConfig {
    #[serde(rename = "ArmorMaterials", default)]
    pub armor_materials: HashMap<String, ArmorMaterial>,
}
