//! The enrichment pass
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! [`Enricher::run`] walks every real item once. For each item it builds an
//! [`ItemPlan`] from a shared borrow of the snapshot, drops that borrow and
//! commits the plan through the mutable one, so later items see the text
//! earlier items were given.

pub mod plan;

pub use plan::{ItemPlan, Planner, TextEdit};

use crate::config::{Config, KeyMaps};
use crate::context::Context;
use crate::database::Database;
use crate::error::Result;
use crate::locale::{FallbackReport, ItemField, Scope, Translations, fill_missing_keys, resolve_language};
use crate::tiers::{TIER_COUNT, TierTable};

/// Items whose final text is logged in translation debugging mode
const DEBUG_SAMPLE: [&str; 8] = [
    "590a3efd86f77437d351a25b",
    "5c0e722886f7740458316a57",
    "5645bcc04bdc2d363b8b4572",
    "590c621186f774138d11ea29",
    "59faff1d86f7746c51718c9c",
    "5c0e625a86f7742d77340f62",
    "5bb20dcad4351e3bac1212da",
    "5780cf7f2459777de4559322",
];

/// Outcome of one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Language the generated text was written in
    pub language: String,
    /// Real items that received text
    pub processed: usize,
    /// Templates left alone (nodes, quest items, currencies, unlisted items)
    pub skipped: usize,
    pub barter_failures: usize,
    /// Processed items per tier, best first
    pub tier_histogram: [usize; TIER_COUNT],
    pub fallback: FallbackReport,
}

/// Phrase tables completed from the default locale, and the language the
/// generated text is written in
#[derive(Debug, Clone)]
pub struct PreparedLanguage {
    pub translations: Translations,
    pub language: String,
    pub fallback: FallbackReport,
}

/// Settings and tables for the enrichment pass
#[derive(Debug, Clone)]
pub struct Enricher {
    pub config: Config,
    pub tiers: TierTable,
    pub keys: KeyMaps,
    pub translations: Translations,
}

impl Enricher {
    pub fn new(config: Config, tiers: TierTable, keys: KeyMaps, translations: Translations) -> Self {
        Self {
            config,
            tiers,
            keys,
            translations,
        }
    }

    /// Bundled config, tier table, key maps and phrase tables
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(
            Config::bundled()?,
            TierTable::bundled()?,
            KeyMaps::bundled()?,
            Translations::bundled()?,
        ))
    }

    /// Complete the phrase tables and pick the output language.
    pub fn prepare_language(&self) -> PreparedLanguage {
        let debug_language = self.config.debug_language();
        let mut translations = self.translations.clone();
        let fallback = fill_missing_keys(&mut translations, debug_language);
        let language = resolve_language(&translations, &self.config.user_locale, debug_language);

        PreparedLanguage {
            translations,
            language,
            fallback,
        }
    }

    /// A planner reading `db` in the prepared language
    pub fn planner<'a>(&'a self, db: &'a Database, prepared: &'a PreparedLanguage) -> Planner<'a> {
        Planner {
            ctx: Context::new(
                db,
                &prepared.language,
                &prepared.translations,
                self.config.format_price,
            ),
            config: &self.config,
            tiers: &self.tiers,
            keys: &self.keys,
        }
    }

    /// Run the pass over every item of the snapshot.
    ///
    /// Never fails: per-item problems are logged and counted in the report.
    pub fn run(&self, db: &mut Database) -> PassReport {
        let prepared = self.prepare_language();

        if !self.config.hide_language_alert {
            tracing::info!(
                "Item text is generated in '{}'. Available languages: {}. Set user_locale to change it, or hide_language_alert to silence this message",
                prepared.language,
                prepared.translations.languages().collect::<Vec<_>>().join(", ")
            );
        }

        let item_ids = db.real_item_ids();
        tracing::info!("Processing {} items", item_ids.len());

        let mut report = PassReport {
            skipped: db.items.len() - item_ids.len(),
            fallback: prepared.fallback.clone(),
            ..PassReport::default()
        };

        for item_id in &item_ids {
            let planned = self.planner(db, &prepared).plan(item_id);

            let Some(plan) = planned else {
                report.skipped += 1;
                continue;
            };

            tracing::debug!(
                "{}: tier {}, {} edits",
                item_id,
                plan.tier.color_index,
                plan.edits.len()
            );
            report.processed += 1;
            report.tier_histogram[plan.tier.color_index] += 1;
            if plan.barter_failed {
                report.barter_failures += 1;
            }
            commit(db, &plan);
        }

        tracing::info!(
            "Finished processing {} items ({} skipped, {} barter failures)",
            report.processed,
            report.skipped,
            report.barter_failures
        );

        if self.config.debug_language().is_some() {
            log_debug_sample(db, &prepared.language);
        }

        report.language = prepared.language;
        report
    }
}

/// Apply a plan: background color first, then every text edit in order,
/// fanned out to every loaded locale.
pub fn commit(db: &mut Database, plan: &ItemPlan) {
    let Some(item) = db.items.get_mut(&plan.item_id) else {
        return;
    };
    item.props.background_color = Some(plan.background_color.clone());

    let props = db.items.get(&plan.item_id).map(|item| &item.props);
    for edit in &plan.edits {
        db.locales.add_to(
            &plan.item_id,
            edit.field,
            &edit.text,
            edit.placement,
            Scope::All,
            props,
        );
    }
}

fn log_debug_sample(db: &Database, lang: &str) {
    for id in DEBUG_SAMPLE {
        let props = db.items.get(id).map(|item| &item.props);
        let text = |field| db.locales.item_text(lang, id, field, props).unwrap_or_default();
        tracing::info!(
            "---\n{}\n{}\n{}\n{}",
            id,
            text(ItemField::Name),
            text(ItemField::ShortName),
            text(ItemField::Description)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;
    use crate::locale::LocaleDict;
    use crate::testing::SnapshotBuilder;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn snapshot() -> Database {
        SnapshotBuilder::new()
            .node("meds", "root")
            .item("salewa", "meds", json!({ "Name": "Salewa", "Weight": 0.5 }), 10_000.0)
            .item("m855a1", ids::AMMO, json!({ "Damage": 45, "PenetrationPower": 41 }), 500.0)
            .item("dogtag", "misc", json!({ "QuestItem": true }), 1.0)
            .flea_price("salewa", 15_000.0)
            .locale("en", "salewa Name", "Salewa first aid kit")
            .locale("ru", "m855a1 Name", "M855A1")
            .build()
    }

    #[test]
    fn test_pass_counts_and_histogram() {
        let mut db = snapshot();
        let report = Enricher::bundled().unwrap().run(&mut db);

        assert_eq!(report.language, "en");
        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.barter_failures, 0);
        assert_eq!(report.tier_histogram, [0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(
            db.items["salewa"].props.background_color.as_deref(),
            Some("default")
        );
    }

    #[test]
    fn test_edits_fan_out_to_every_locale() {
        let mut db = snapshot();
        Enricher::bundled().unwrap().run(&mut db);

        assert_eq!(db.locales.get("ru", "m855a1 Name"), Some("M855A1 (45/41) {S}"));
        assert_eq!(db.locales.get("en", "m855a1 Name"), Some(" (45/41) {S}"));
        // Untouched fields stay unset; edited ones compose onto the default locale
        assert_eq!(db.locales.get("ru", "salewa Name"), None);
        assert!(
            db.locales
                .get("ru", "salewa Description")
                .is_some_and(|d| d.starts_with("15,000 ₽ [15,000 ₽/s]"))
        );
    }

    #[test]
    fn test_commit_is_not_idempotent() {
        let mut db = snapshot();
        let enricher = Enricher::bundled().unwrap();
        let prepared = enricher.prepare_language();
        let plan = enricher.planner(&db, &prepared).plan("m855a1").unwrap();

        commit(&mut db, &plan);
        commit(&mut db, &plan);
        assert_eq!(
            db.locales.get("en", "m855a1 ShortName"),
            Some(" {S} {S}")
        );
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let mut db = snapshot();
        db.locales.insert("xx".to_string(), LocaleDict::new());
        let mut enricher = Enricher::bundled().unwrap();
        enricher.config.user_locale = "xx".to_string();

        let report = enricher.run(&mut db);
        assert_eq!(report.language, "en");
        assert!(db.locales.get("xx", "salewa Description").is_some());
    }
}
