//! Command line flags
//!
//! Every flag is optional and overrides the matching config file value.

use crate::config::{Config, MAX_COUNT};
use crate::model::locale::Locale;
use crate::model::profile::ProfileKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fleet-command",
    version,
    about = "Executive dashboard for a simulated generator fleet"
)]
pub struct Cli {
    /// Seed for the fleet generator
    #[arg(long, env = "FLEET_SEED")]
    pub seed: Option<u64>,

    /// Number of generators to simulate
    #[arg(long, value_parser = parse_count)]
    pub count: Option<usize>,

    /// Generator profile: standard or extended
    #[arg(long)]
    pub profile: Option<ProfileKind>,

    /// Display locale: en or ar
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Directory for CSV exports
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,
}

fn parse_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a generator count", value))?;
    if count > MAX_COUNT {
        return Err(format!("at most {} generators are supported", MAX_COUNT));
    }
    Ok(count)
}

impl Cli {
    /// Merge flags over a loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(profile) = self.profile {
            config.profile = profile;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(ref dir) = self.export_dir {
            config.export_dir = Some(dir.clone());
        }
        config
    }
}
