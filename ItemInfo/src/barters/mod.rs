//! Trader barters
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod resolver;
pub mod summary;

pub use resolver::{BarterCost, ChainWalk, ResolvedBarter, overall_rarity, resolve_item_barters, walk_to_root};
pub use summary::{BarterSummary, barter_info, barter_resource_info};
