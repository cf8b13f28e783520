//! Scenario metadata: the pre-fight setup (farmers and team rosters) carrying the
//! stable ids of every entity. Optional input; any failure to load it means
//! "no scenario", never an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_SCENARIO_PATH: &str = "data/scenario/scenario1.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    #[serde(default)]
    pub farmers: Vec<ScenarioFarmer>,
    /// One roster per team.
    #[serde(default)]
    pub entities: Vec<Vec<ScenarioEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFarmer {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScenarioRecord {
    /// All team rosters in one sequence: team order, then roster order.
    pub fn flattened_entities(&self) -> impl Iterator<Item = &ScenarioEntity> {
        self.entities.iter().flatten()
    }

    pub fn farmer(&self, id: i64) -> Option<&ScenarioFarmer> {
        self.farmers.iter().rev().find(|farmer| farmer.id == id)
    }
}

/// Load the scenario file. Returns None if the file is missing, unreadable or malformed.
pub fn load_scenario(path: impl AsRef<Path>) -> Option<ScenarioRecord> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(
                "scenario unavailable at {}: {err}; using turn ids",
                path.display()
            );
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::debug!(
                "scenario at {} is malformed: {err}; using turn ids",
                path.display()
            );
            None
        }
    }
}
