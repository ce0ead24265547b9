//! Rendering helpers for generated item text
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! - [`format`]: number and price formatting
//! - [`tags`]: short fragments added to item names
//! - [`blocks`]: stat lines placed in descriptions
//! - [`sections`]: titled description sections and their order

pub mod blocks;
pub mod format;
pub mod sections;
pub mod tags;

pub use format::{format_price, number, round_half_up, round_with_precision};
pub use sections::{DescriptionSuffix, SectionTitle, section};
