use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod apply;
pub mod execute;
pub mod inspect;
pub mod translations;

/// Settings files overriding the bundled ones
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (defaults to the bundled config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tier table file (defaults to the bundled tiers.toml)
    #[arg(long)]
    pub tiers: Option<PathBuf>,

    /// Key map file (defaults to the bundled keys.toml)
    #[arg(long)]
    pub keys: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich every item of a snapshot and write the tables back
    Apply {
        /// Snapshot directory
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory (defaults to the snapshot directory)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Skip the configured startup delay
        #[arg(long)]
        no_delay: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show the text one item would receive, without writing anything
    Inspect {
        /// Snapshot directory
        #[arg(short, long)]
        source: PathBuf,

        /// Item template id
        item: String,

        /// Locale to print (defaults to the generated text language)
        #[arg(short, long)]
        lang: Option<String>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Check the phrase tables of one language against the default locale
    Translations {
        /// Language to check (defaults to the configured debug language)
        #[arg(short, long)]
        lang: Option<String>,

        /// Settings file (defaults to the bundled config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only print the counts
        #[arg(short, long)]
        quiet: bool,
    },
}
