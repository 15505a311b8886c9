//! Command-line surface of `nextword`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use nw_core::candidates::TierMode;
use nw_core::SuggesterConfig;

pub const DATA_PATH_ENV: &str = "NEXTWORD_DATA_PATH";

const AFTER_HELP: &str = "\
You need to install nextword-data and set the \"NEXTWORD_DATA_PATH\" environment variable.
It is available at https://github.com/high-moctane/nextword-data

The result depends on whether the input string ends with a space character.
If the string does not end with a space, nextword prints candidate words which
begin with the last word in the sentence.

Example:
    input:  \"Alice was \"
    output: \"not a the in still born very so to beginning too at sitting ...\"

    input:  \"Alice w\"
    output: \"was would were went with will who wrote when wants ...\"";

#[derive(Debug, Parser)]
#[command(
    name = "nextword",
    version,
    about = "Prints the most likely English words that follow the stdin sentence",
    after_help = AFTER_HELP,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the data directory
    #[arg(short = 'd', long = "data", env = DATA_PATH_ENV, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Max candidates number
    #[arg(short = 'n', long = "candidates", value_name = "N")]
    pub candidates: Option<usize>,

    /// Max candidates number (deprecated, use -n)
    #[arg(short = 'c', value_name = "N", hide = true, conflicts_with = "candidates")]
    pub candidates_deprecated: Option<usize>,

    /// Stop at the first context tier with candidates instead of merging every tier
    #[arg(short = 'f', long)]
    pub first_match: bool,

    /// Merge every context tier (the default; kept for older callers)
    #[arg(short = 'g', hide = true, conflicts_with = "first_match")]
    pub greedy: bool,

    /// Memory-map the data files
    #[arg(long)]
    pub mmap: bool,

    /// Settings TOML overriding the built-in defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Cli {
    /// Engine configuration: settings defaults overridden by flags. `None`
    /// when no data directory was given by flag or environment.
    pub fn suggester_config(&self) -> Option<SuggesterConfig> {
        let mut config = SuggesterConfig::new(self.data.clone()?);
        if let Some(n) = self.candidates.or(self.candidates_deprecated) {
            config.max_candidates = n;
        }
        if self.first_match {
            config.tier_mode = TierMode::FirstMatch;
        } else if self.greedy {
            config.tier_mode = TierMode::MergeAll;
        }
        if self.mmap {
            config.mmap = true;
        }
        Some(config)
    }
}
