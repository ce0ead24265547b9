//! Well-known template, trader and area identifiers
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

// Category roots (item `_parent` values)
pub const CURRENCY: &str = "543be5dd4bdc2deb348b4569";
pub const AMMO: &str = "5485a8684bdc2da71d8b4567";
pub const AMMO_BOX: &str = "543be5cb4bdc2deb348b4568";
pub const KEY: &str = "543be5e94bdc2df1348b4568";
pub const HEADWEAR: &str = "5a341c4086f77401f2541505";
pub const ARMOR: &str = "5448e54d4bdc2dcc718b4568";
pub const VEST: &str = "5448e5284bdc2dcb718b4567";
pub const SILENCER: &str = "550aa4cd4bdc2dd8348b456c";
pub const FLASH_HIDER: &str = "550aa4bf4bdc2dd6348b456b";
pub const PISTOL_GRIP: &str = "55802f4a4bdc2ddb688b4569";
pub const FORE_GRIP: &str = "55818af64bdc2d5b648b4570";
pub const BIPOD: &str = "55818afb4bdc2dde698b456d";
pub const MAGAZINE: &str = "5448bc234bdc2d3c308b4569";

// Currencies
pub const ROUBLES: &str = "5449016a4bdc2d6f028b456f";
pub const EUROS: &str = "569668774bdc2da2298b4568";
pub const DOLLARS: &str = "5696686a4bdc2da3298b456a";

// Traders
pub const PRAPOR: &str = "54cb50c76803fa8b248b4571";
pub const THERAPIST: &str = "54cb57776803fa99248b456e";
pub const SKIER: &str = "58330581ace78e27b8b10cee";
pub const PEACEKEEPER: &str = "5935c25fb3acc3127c3d8cd9";
pub const MECHANIC: &str = "5a7c2eca46aef81a7ca2145d";
pub const RAGMAN: &str = "5ac3b934156ae10c4430e83c";
pub const JAEGER: &str = "5c0647fdd443bc2504c2d371";

/// Traders scanned for the best sell price, best `buy_price_coef` first.
pub const TRADER_PRIORITY: [&str; 7] = [
    THERAPIST,
    RAGMAN,
    JAEGER,
    MECHANIC,
    PRAPOR,
    SKIER,
    PEACEKEEPER,
];

/// `parentId` of a top-level assortment entry.
pub const ASSORT_ROOT: &str = "hideout";

/// Hideout area type of the seasonal (Christmas tree) area.
pub const SEASONAL_AREA: i64 = 21;

/// The product whose craft time scales with installed boosters (Physical bitcoin).
pub const BOOSTED_PRODUCT: &str = "59faff1d86f7746c51718c9c";

/// Booster counts previewed for the boosted product.
pub const BOOST_PREVIEWS: [u32; 4] = [1, 10, 25, 50];

/// Locale every other locale falls back to.
pub const DEFAULT_LOCALE: &str = "en";
