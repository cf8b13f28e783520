//! Raw fight record as written by the fight generator.
//! Missing fields fall back to empty defaults instead of failing the parse.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Simulation-local entity id, unique within one fight record.
pub type TurnId = i64;

pub const DEFAULT_FIGHT_DATA_PATH: &str = "data/fight.json";

/// Raw winner value meaning no team won.
pub const NO_WINNER: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFightRecord {
    #[serde(default)]
    pub fight: RawFight,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFight {
    #[serde(default)]
    pub leeks: Vec<RawLeek>,
    /// Keyed by stringified entity id; the key may be a turn id or a real id.
    #[serde(default)]
    pub dead: HashMap<String, bool>,
    /// `None` when the key is missing or `null`.
    #[serde(default)]
    pub winner: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub map: Option<Value>,
    #[serde(default)]
    pub actions: Option<Value>,
}

impl RawFight {
    /// Raw winner, with a missing or `null` value read as [`NO_WINNER`].
    pub fn winner(&self) -> i64 {
        self.winner.unwrap_or(NO_WINNER)
    }

    pub fn duration(&self) -> i64 {
        self.duration.unwrap_or(0)
    }
}

/// One fighter as the generator reports it.
///
/// The typed fields are a read-only view over `source`, the object exactly as it
/// was parsed. Serializing a leek writes `source` back out, so explicit `null`s
/// and unknown keys survive under `data.leeks`. Typed fields that `source` lacks
/// (a leek built in code) are added on the way out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct RawLeek {
    pub id: TurnId,
    pub name: Option<String>,
    pub level: Option<i64>,
    pub team: Option<i64>,
    pub hat: Option<Value>,
    pub skin: Option<Value>,
    pub farmer: Option<i64>,
    pub metal: Option<bool>,
    pub face: Option<i64>,
    pub source: Map<String, Value>,
}

#[derive(Deserialize)]
struct LeekFields {
    id: TurnId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    level: Option<i64>,
    #[serde(default)]
    team: Option<i64>,
    #[serde(default)]
    hat: Option<Value>,
    #[serde(default)]
    skin: Option<Value>,
    #[serde(default)]
    farmer: Option<i64>,
    #[serde(default)]
    metal: Option<bool>,
    #[serde(default)]
    face: Option<i64>,
}

impl TryFrom<Map<String, Value>> for RawLeek {
    type Error = serde_json::Error;

    fn try_from(source: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: LeekFields = serde_json::from_value(Value::Object(source.clone()))?;
        Ok(Self {
            id: fields.id,
            name: fields.name,
            level: fields.level,
            team: fields.team,
            hat: fields.hat,
            skin: fields.skin,
            farmer: fields.farmer,
            metal: fields.metal,
            face: fields.face,
            source,
        })
    }
}

impl From<RawLeek> for Map<String, Value> {
    fn from(leek: RawLeek) -> Self {
        let mut out = leek.source;
        let typed = [
            ("id", Some(Value::from(leek.id))),
            ("name", leek.name.map(Value::from)),
            ("level", leek.level.map(Value::from)),
            ("team", leek.team.map(Value::from)),
            ("hat", leek.hat),
            ("skin", leek.skin),
            ("farmer", leek.farmer.map(Value::from)),
            ("metal", leek.metal.map(Value::from)),
            ("face", leek.face.map(Value::from)),
        ];
        for (key, value) in typed {
            if let Some(value) = value {
                out.entry(key).or_insert(value);
            }
        }
        out
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Fight data file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read fight data file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid fight data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Parse a raw fight record from a JSON string.
pub fn parse_raw_fight_json(input: &str) -> Result<RawFightRecord, serde_json::Error> {
    serde_json::from_str(input)
}

/// Read and parse the raw fight record. A missing file is reported separately
/// from unreadable or malformed content.
pub fn load_raw_fight(path: impl AsRef<Path>) -> Result<RawFightRecord, SourceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_raw_fight_json(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
