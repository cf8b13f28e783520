//! Fight response schema consumed by the game client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::raw_fight::RawLeek;
use crate::fight::identity::RealId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResponse {
    pub id: u64,
    pub date: i64,
    pub year: i32,
    #[serde(rename = "type")]
    pub fight_type: i32,
    pub context: i32,
    pub status: i32,
    pub winner: i64,
    pub leeks1: Vec<TopLeek>,
    pub leeks2: Vec<TopLeek>,
    pub farmers1: BTreeMap<String, FarmerSummary>,
    pub farmers2: BTreeMap<String, FarmerSummary>,
    pub report: Report,
    pub comments: Vec<Value>,
    pub tournament: i64,
    pub views: i64,
    pub starter: Option<Value>,
    pub trophies: Vec<Value>,
    pub seed: i64,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub data: FightData,
}

/// Entity summary shown in the fight header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLeek {
    pub id: RealId,
    pub name: Option<String>,
    pub level: Option<i64>,
    pub talent: i64,
    pub hat: Option<Value>,
    pub skin: Option<Value>,
    pub farmer: Option<i64>,
    pub weapon: Option<Value>,
    pub title: Vec<Value>,
    pub metal: bool,
    pub face: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub duration: i64,
    pub win: i64,
    pub leeks1: Vec<ReportLeek>,
    pub leeks2: Vec<ReportLeek>,
    pub bonus: i64,
    pub flags1: Vec<Value>,
    pub flags2: Vec<Value>,
}

/// Per-leek battle outcome. Progression fields are always zero: the generator
/// does not award experience, talent or money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLeek {
    pub id: RealId,
    pub name: Option<String>,
    pub dead: bool,
    pub td: i64,
    pub resources: Map<String, Value>,
    pub talent: i64,
    pub talent_gain: i64,
    pub xp: i64,
    pub cur_xp: i64,
    pub next_xp: i64,
    pub prev_xp: i64,
    pub level: Option<i64>,
    pub money: i64,
    pub appearance: i32,
    pub xp_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerSummary {
    pub id: i64,
    pub name: String,
    pub avatar_changed: i64,
    pub muted: bool,
}

/// Replay payload. Still keyed by turn ids: the actions reference fighters by
/// their position in this list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightData {
    pub leeks: Vec<RawLeek>,
    pub map: Option<Value>,
    pub actions: Option<Value>,
}
