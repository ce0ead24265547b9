//! Handbook (baseline price) table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::lenient_number_or_zero;

/// A handbook item entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandbookItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "ParentId", default)]
    pub parent_id: String,
    #[serde(rename = "Price", default, deserialize_with = "lenient_number_or_zero")]
    pub price: f64,
}

/// A handbook category entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandbookCategory {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "ParentId", default)]
    pub parent_id: Option<String>,
}

/// On-disk shape of the handbook
#[derive(Debug, Clone, Default, Deserialize)]
struct HandbookFile {
    #[serde(rename = "Categories", default)]
    categories: Vec<HandbookCategory>,
    #[serde(rename = "Items", default)]
    items: Vec<HandbookItem>,
}

/// The handbook, indexed by item id
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HandbookFile")]
pub struct Handbook {
    pub categories: Vec<HandbookCategory>,
    items: Vec<HandbookItem>,
    index: HashMap<String, usize>,
}

impl From<HandbookFile> for Handbook {
    fn from(file: HandbookFile) -> Self {
        Self::new(file.categories, file.items)
    }
}

impl Handbook {
    pub fn new(categories: Vec<HandbookCategory>, items: Vec<HandbookItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();
        Self {
            categories,
            items,
            index,
        }
    }

    /// Get the handbook entry of an item
    pub fn get(&self, id: &str) -> Option<&HandbookItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Baseline price of an item
    pub fn price(&self, id: &str) -> Option<f64> {
        self.get(id).map(|entry| entry.price)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn items(&self) -> &[HandbookItem] {
        &self.items
    }
}
