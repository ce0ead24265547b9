//! # ItemInfo
//!
//! Enriches the item text of an SPT server database: prices, value tiers,
//! barters, crafts, quest and hideout usage, armor and container stats.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! ## What the pass does
//!
//! For every real item (category nodes, quest items and currencies are
//! skipped) the pass:
//!
//! - Resolves the best flea and trader price and the value per inventory slot
//! - Buckets the item into one of seven tiers, sets its background color and
//!   tags its name with a tier code
//! - Flattens trader barter chains and reverse-looks up every barter, craft,
//!   quest and hideout upgrade that consumes the item
//! - Composes the result into the item's name, short name and description in
//!   every loaded locale
//!
//! ## Quick Start
//!
//! ```no_run
//! use iteminfo::prelude::*;
//!
//! let mut db = load_dir("snapshot/")?;
//! let report = Enricher::bundled()?.run(&mut db);
//! println!("Processed {} items", report.processed);
//! write_dir(&db, "snapshot/")?;
//! # Ok::<(), iteminfo::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `iteminfo` command-line binary

pub mod barters;
pub mod config;
pub mod context;
pub mod database;
pub mod enrich;
pub mod error;
pub mod ids;
pub mod locale;
pub mod pricing;
pub mod text;
pub mod tiers;
pub mod usage;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::config::{Config, KeyMaps};
    pub use crate::database::{Database, load_dir, write_dir};
    pub use crate::enrich::{Enricher, ItemPlan, PassReport, Planner};
    pub use crate::locale::{ItemField, LocaleKey, LocaleStore, Translations};
    pub use crate::tiers::{Tier, TierTable};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
