//! Tier classification
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Every item lands in one of seven buckets, best first. Six descending
//! thresholds separate them; the seventh bucket is everything below the last
//! threshold. A bucket picks the item's background color and, for labelled
//! buckets, a name code appended to the item name.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const BUNDLED: &str = include_str!("../config/tiers.toml");

/// Number of buckets
pub const TIER_COUNT: usize = 7;

/// Penetration breakpoints for ammunition
pub const AMMO_PENETRATION: [f64; 6] = [60.0, 50.0, 40.0, 30.0, 20.0, 10.0];

/// A classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Bucket index, 0 is best
    pub color_index: usize,
    /// Name code index for labelled buckets
    pub label_index: Option<usize>,
}

/// Thresholds plus comparison rules for one kind of metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierScale {
    pub thresholds: [f64; 6],
    /// `>=` instead of `>`
    pub inclusive: bool,
    /// Buckets `0..labelled` carry a name code
    pub labelled: usize,
}

impl TierScale {
    /// Penetration scale: inclusive, every bucket labelled
    pub fn ammo() -> Self {
        Self {
            thresholds: AMMO_PENETRATION,
            inclusive: true,
            labelled: TIER_COUNT,
        }
    }

    /// Price scale: strict, first five buckets labelled
    pub fn price(thresholds: [f64; 6]) -> Self {
        Self {
            thresholds,
            inclusive: false,
            labelled: 5,
        }
    }

    fn passes(&self, metric: f64, threshold: f64) -> bool {
        if self.inclusive {
            metric >= threshold
        } else {
            metric > threshold
        }
    }
}

/// Map a metric to its bucket: the first threshold it passes, else the last
/// bucket. NaN never passes a threshold.
pub fn classify(metric: f64, scale: &TierScale) -> Tier {
    let color_index = scale
        .thresholds
        .iter()
        .position(|&threshold| scale.passes(metric, threshold))
        .unwrap_or(TIER_COUNT - 1);

    Tier {
        color_index,
        label_index: (color_index < scale.labelled).then_some(color_index),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceThresholds {
    pub key: Vec<f64>,
    pub item_per_slot: Vec<f64>,
}

/// Colors, name codes and price thresholds, as stored in `tiers.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub background_colors: Vec<String>,
    pub name_codes: Vec<String>,
    pub price_thresholds: PriceThresholds,
}

impl TierTable {
    /// The table shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED)
    }

    /// Load and validate a tier table file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let table: Self = toml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    /// Seven colors, seven codes and six strictly descending thresholds per scale
    pub fn validate(&self) -> Result<()> {
        if self.background_colors.len() != TIER_COUNT {
            return Err(invalid(format!(
                "expected {TIER_COUNT} background colors, found {}",
                self.background_colors.len()
            )));
        }
        if self.name_codes.len() != TIER_COUNT {
            return Err(invalid(format!(
                "expected {TIER_COUNT} name codes, found {}",
                self.name_codes.len()
            )));
        }
        check_thresholds("key", &self.price_thresholds.key)?;
        check_thresholds("item_per_slot", &self.price_thresholds.item_per_slot)?;
        Ok(())
    }

    pub fn key_scale(&self) -> TierScale {
        TierScale::price(to_array(&self.price_thresholds.key))
    }

    pub fn item_scale(&self) -> TierScale {
        TierScale::price(to_array(&self.price_thresholds.item_per_slot))
    }

    pub fn color(&self, tier: Tier) -> &str {
        &self.background_colors[tier.color_index]
    }

    pub fn code(&self, tier: Tier) -> Option<&str> {
        tier.label_index.map(|i| self.name_codes[i].as_str())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidTierTable { message }
}

fn check_thresholds(name: &str, thresholds: &[f64]) -> Result<()> {
    if thresholds.len() != TIER_COUNT - 1 {
        return Err(invalid(format!(
            "{name}: expected {} thresholds, found {}",
            TIER_COUNT - 1,
            thresholds.len()
        )));
    }
    if thresholds.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(invalid(format!("{name}: thresholds must be strictly descending")));
    }
    Ok(())
}

fn to_array(thresholds: &[f64]) -> [f64; 6] {
    let mut out = [f64::NEG_INFINITY; 6];
    for (slot, value) in out.iter_mut().zip(thresholds) {
        *slot = *value;
    }
    out
}
