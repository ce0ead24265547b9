//! CLI command for running the enrichment pass

use std::path::Path;
use std::time::Duration;

use super::SettingsArgs;
use crate::config::{Config, KeyMaps};
use crate::database::{load_dir, write_dir};
use crate::enrich::Enricher;
use crate::locale::Translations;
use crate::tiers::TierTable;

/// Build an enricher from the bundled settings, replacing any file given
pub fn load_enricher(settings: &SettingsArgs) -> anyhow::Result<Enricher> {
    let config = match &settings.config {
        Some(path) => Config::load(path)?,
        None => Config::bundled()?,
    };
    let tiers = match &settings.tiers {
        Some(path) => TierTable::load(path)?,
        None => TierTable::bundled()?,
    };
    let keys = match &settings.keys {
        Some(path) => KeyMaps::load(path)?,
        None => KeyMaps::bundled()?,
    };

    Ok(Enricher::new(config, tiers, keys, Translations::bundled()?))
}

pub fn execute(
    source: &Path,
    destination: Option<&Path>,
    no_delay: bool,
    settings: &SettingsArgs,
) -> anyhow::Result<()> {
    let enricher = load_enricher(settings)?;

    let delay = enricher.config.delay;
    if delay.enabled && !no_delay {
        tracing::info!("Waiting {}s before processing", delay.seconds);
        std::thread::sleep(Duration::from_secs(delay.seconds));
    }

    let mut db = load_dir(source)?;
    let report = enricher.run(&mut db);
    write_dir(&db, destination.unwrap_or(source))?;

    println!(
        "Enriched {} items in '{}' ({} skipped)",
        report.processed, report.language, report.skipped
    );
    if report.barter_failures > 0 {
        println!("  {} items left without barter info", report.barter_failures);
    }
    for (color, count) in enricher.tiers.background_colors.iter().zip(report.tier_histogram) {
        println!("  {color:<8} {count}");
    }

    Ok(())
}
