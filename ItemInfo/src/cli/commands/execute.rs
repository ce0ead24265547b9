//! Command execution implementations

use super::Commands;
use super::{apply, inspect, translations};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Apply {
                source,
                destination,
                no_delay,
                settings,
            } => apply::execute(source, destination.as_deref(), *no_delay, settings),
            Commands::Inspect {
                source,
                item,
                lang,
                settings,
            } => inspect::execute(source, item, lang.as_deref(), settings),
            Commands::Translations { lang, config, quiet } => {
                translations::execute(lang.as_deref(), config.as_deref(), *quiet)
            }
        }
    }
}
