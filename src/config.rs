//! Runtime configuration: where the fight data lives and how the server binds.
//! Values come from CLI flags, falling back to environment variables, then defaults.

use std::path::PathBuf;

use clap::Args;

use crate::data::{DEFAULT_FIGHT_DATA_PATH, DEFAULT_SCENARIO_PATH};
use crate::fight::PlaceholderDefaults;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7000";

/// Input file flags shared by every subcommand that projects a fight.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Raw fight JSON written by the generator
    #[arg(long, env = "FIGHT_DATA_PATH", default_value = DEFAULT_FIGHT_DATA_PATH)]
    pub fight_data: PathBuf,

    /// Scenario JSON used to recover real ids and farmer names
    #[arg(long, env = "FIGHT_SCENARIO_PATH", default_value = DEFAULT_SCENARIO_PATH)]
    pub scenario: PathBuf,

    /// Ignore the scenario file and expose turn ids
    #[arg(long)]
    pub no_scenario: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub fight_data_path: PathBuf,
    /// None disables scenario lookup entirely.
    pub scenario_path: Option<PathBuf>,
    pub defaults: PlaceholderDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fight_data_path: PathBuf::from(DEFAULT_FIGHT_DATA_PATH),
            scenario_path: Some(PathBuf::from(DEFAULT_SCENARIO_PATH)),
            defaults: PlaceholderDefaults::default(),
        }
    }
}

impl AppConfig {
    pub fn from_sources(bind_addr: impl Into<String>, sources: &SourceArgs) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            fight_data_path: sources.fight_data.clone(),
            scenario_path: (!sources.no_scenario).then(|| sources.scenario.clone()),
            defaults: PlaceholderDefaults::default(),
        }
    }

    pub fn with_fight_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.fight_data_path = path.into();
        self
    }

    pub fn with_scenario(mut self, path: Option<PathBuf>) -> Self {
        self.scenario_path = path;
        self
    }
}
