//! Key to map assignments used for key name tags

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUNDLED: &str = include_str!("../../config/keys.toml");

/// Label for keys no map lists
pub const UNKNOWN_KEY_LABEL: &str = "UNK";

/// The keys of one map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    /// Tag text, rendered as `[<label>] `
    pub label: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ids: Vec<String>,
}

/// Ordered map list; the first map listing a key wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaps {
    #[serde(rename = "map", default)]
    pub maps: Vec<KeyMap>,
}

impl KeyMaps {
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn label_for(&self, id: &str) -> &str {
        self.maps
            .iter()
            .find(|map| map.ids.iter().any(|k| k == id))
            .map_or(UNKNOWN_KEY_LABEL, |map| map.label.as_str())
    }

    /// Name tag for a key, e.g. `[C] `
    pub fn tag_for(&self, id: &str) -> String {
        format!("[{}] ", self.label_for(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_listing_wins() {
        let maps = KeyMaps::from_toml(
            r#"
            [[map]]
            label = "M"
            ids = ["shared"]

            [[map]]
            label = "C"
            ids = ["shared", "dorm"]
            "#,
        )
        .unwrap();

        assert_eq!(maps.tag_for("shared"), "[M] ");
        assert_eq!(maps.tag_for("dorm"), "[C] ");
        assert_eq!(maps.tag_for("other"), "[UNK] ");
    }

    #[test]
    fn test_bundled_order() {
        let maps = KeyMaps::bundled().unwrap();
        let labels: Vec<_> = maps.maps.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            ["M", "C", "F", "R", "GZ", "LH", "Sh", "I", "St", "W", "L", "U"]
        );
    }
}
