pub mod raw_fight;
pub mod scenario;

pub use raw_fight::{
    load_raw_fight, parse_raw_fight_json, RawFight, RawFightRecord, RawLeek, SourceError,
    TurnId, DEFAULT_FIGHT_DATA_PATH, NO_WINNER,
};
pub use scenario::{
    load_scenario, ScenarioEntity, ScenarioFarmer, ScenarioRecord, DEFAULT_SCENARIO_PATH,
};
