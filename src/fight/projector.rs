//! Projects a raw fight record (plus optional scenario) into a [`FightResponse`].

use std::collections::{BTreeMap, HashMap};

use serde_json::Map;

use crate::data::raw_fight::{RawFightRecord, RawLeek, NO_WINNER};
use crate::data::scenario::{ScenarioEntity, ScenarioRecord};
use crate::fight::defaults::PlaceholderDefaults;
use crate::fight::identity::{resolve_identity, IdentityMap};
use crate::fight::response::{
    FarmerSummary, FightData, FightResponse, Report, ReportLeek, TopLeek,
};

/// Map the generator's winner code to the client's. "No winner" (-1) becomes 0,
/// which the client cannot tell apart from a raw 0.
pub fn normalize_winner(raw_winner: i64) -> i64 {
    if raw_winner == NO_WINNER {
        0
    } else {
        raw_winner
    }
}

/// Split leeks into team 1 and team 2, keeping input order. Leeks on any other
/// team (or none) are dropped.
pub fn partition_teams(leeks: &[RawLeek]) -> (Vec<&RawLeek>, Vec<&RawLeek>) {
    let team1 = leeks.iter().filter(|l| l.team == Some(1)).collect();
    let team2 = leeks.iter().filter(|l| l.team == Some(2)).collect();
    (team1, team2)
}

pub fn format_top_leek(leek: &RawLeek, identities: &IdentityMap) -> TopLeek {
    TopLeek {
        id: identities.real_id(leek.id),
        name: leek.name.clone(),
        level: leek.level,
        talent: 0,
        hat: leek.hat.clone(),
        skin: leek.skin.clone(),
        farmer: leek.farmer,
        weapon: None,
        title: Vec::new(),
        metal: leek.metal.unwrap_or(false),
        face: leek.face.unwrap_or(0),
    }
}

/// Death flag for a leek: the real id key is probed first, then the turn id key.
/// Whichever key is present decides, even when its value is `false`.
pub fn is_dead(dead: &HashMap<String, bool>, leek: &RawLeek, identities: &IdentityMap) -> bool {
    let real_id = identities.real_id(leek.id);
    dead.get(&real_id.to_string())
        .or_else(|| dead.get(&leek.id.to_string()))
        .copied()
        .unwrap_or(false)
}

pub fn format_report_leek(
    leek: &RawLeek,
    identities: &IdentityMap,
    dead: &HashMap<String, bool>,
    defaults: &PlaceholderDefaults,
) -> ReportLeek {
    ReportLeek {
        id: identities.real_id(leek.id),
        name: leek.name.clone(),
        dead: is_dead(dead, leek, identities),
        td: 0,
        resources: Map::new(),
        talent: 0,
        talent_gain: 0,
        xp: 0,
        cur_xp: 0,
        next_xp: 0,
        prev_xp: 0,
        level: leek.level,
        money: 0,
        appearance: defaults.appearance,
        xp_locked: false,
    }
}

/// Farmers of one team keyed by stringified farmer id. A farmer fielding several
/// leeks is written once per leek; the last write wins. Leeks without a farmer
/// (or with farmer id 0) contribute nothing.
pub fn farmers_for_team(
    leeks: &[&RawLeek],
    scenario: Option<&ScenarioRecord>,
    now: i64,
) -> BTreeMap<String, FarmerSummary> {
    let mut farmers = BTreeMap::new();
    for leek in leeks {
        let Some(farmer_id) = leek.farmer.filter(|id| *id != 0) else {
            continue;
        };
        let name = scenario
            .and_then(|s| s.farmer(farmer_id))
            .and_then(|f| f.name.clone())
            .unwrap_or_else(|| format!("Farmer {farmer_id}"));
        farmers.insert(
            farmer_id.to_string(),
            FarmerSummary {
                id: farmer_id,
                name,
                avatar_changed: now,
                muted: false,
            },
        );
    }
    farmers
}

/// Team display name: the first leek's name, or the fallback for an empty team.
/// A first leek without a name gives `None`.
pub fn team_name(team: &[&RawLeek], fallback: &str) -> Option<String> {
    match team.first() {
        Some(leek) => leek.name.clone(),
        None => Some(fallback.to_string()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct FightProjector {
    defaults: PlaceholderDefaults,
}

impl FightProjector {
    pub fn new(defaults: PlaceholderDefaults) -> Self {
        Self { defaults }
    }

    /// Project using the current wall-clock time for `date` and `avatar_changed`.
    pub fn project(
        &self,
        fight_id: u64,
        raw: &RawFightRecord,
        scenario: Option<&ScenarioRecord>,
    ) -> FightResponse {
        self.project_at(fight_id, raw, scenario, chrono::Utc::now().timestamp())
    }

    /// Project with an explicit timestamp. Output depends only on the arguments.
    pub fn project_at(
        &self,
        fight_id: u64,
        raw: &RawFightRecord,
        scenario: Option<&ScenarioRecord>,
        now: i64,
    ) -> FightResponse {
        let fight = &raw.fight;
        let leeks = fight.leeks.as_slice();

        let entities: Option<Vec<&ScenarioEntity>> =
            scenario.map(|s| s.flattened_entities().collect());
        let identities = resolve_identity(leeks, entities.as_deref());

        let winner = normalize_winner(fight.winner());
        let (team1, team2) = partition_teams(leeks);
        let defaults = &self.defaults;

        let top = |team: &[&RawLeek]| -> Vec<TopLeek> {
            team.iter()
                .map(|leek| format_top_leek(leek, &identities))
                .collect()
        };
        let report = |team: &[&RawLeek]| -> Vec<ReportLeek> {
            team.iter()
                .map(|leek| format_report_leek(leek, &identities, &fight.dead, defaults))
                .collect()
        };

        FightResponse {
            id: fight_id,
            date: now,
            year: defaults.year,
            fight_type: defaults.fight_type,
            context: defaults.context,
            status: defaults.status,
            winner,
            leeks1: top(team1.as_slice()),
            leeks2: top(team2.as_slice()),
            farmers1: farmers_for_team(&team1, scenario, now),
            farmers2: farmers_for_team(&team2, scenario, now),
            report: Report {
                duration: fight.duration(),
                win: winner,
                leeks1: report(team1.as_slice()),
                leeks2: report(team2.as_slice()),
                bonus: defaults.bonus,
                flags1: Vec::new(),
                flags2: Vec::new(),
            },
            comments: Vec::new(),
            tournament: defaults.tournament,
            views: defaults.views,
            starter: None,
            trophies: Vec::new(),
            seed: defaults.seed,
            team1_name: team_name(&team1, &defaults.team1_fallback_name),
            team2_name: team_name(&team2, &defaults.team2_fallback_name),
            data: FightData {
                leeks: fight.leeks.clone(),
                map: fight.map.clone(),
                actions: fight.actions.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::scenario::ScenarioFarmer;

    fn leek(id: i64, name: &str, team: i64, farmer: Option<i64>) -> RawLeek {
        RawLeek {
            id,
            name: Some(name.to_string()),
            level: Some(10),
            team: Some(team),
            farmer,
            ..RawLeek::default()
        }
    }

    #[test]
    fn winner_minus_one_becomes_zero_others_pass_through() {
        assert_eq!(normalize_winner(-1), 0);
        assert_eq!(normalize_winner(0), 0);
        assert_eq!(normalize_winner(1), 1);
        assert_eq!(normalize_winner(2), 2);
    }

    #[test]
    fn partition_drops_unknown_teams_and_keeps_order() {
        let leeks = vec![
            leek(0, "a", 2, None),
            leek(1, "b", 1, None),
            leek(2, "c", 3, None),
            leek(3, "d", 2, None),
            RawLeek {
                id: 4,
                ..RawLeek::default()
            },
        ];
        let (t1, t2) = partition_teams(&leeks);
        assert_eq!(t1.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(t2.iter().map(|l| l.id).collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn dead_probe_prefers_real_id_then_turn_id() {
        let leeks = vec![leek(3, "Hero", 1, None)];
        let hero = ScenarioEntity {
            id: Some(5),
            name: Some("Hero".to_string()),
            ..ScenarioEntity::default()
        };
        let identities = resolve_identity(&leeks, Some(&[&hero][..]));

        let by_real: HashMap<String, bool> = [("5".to_string(), true)].into();
        assert!(is_dead(&by_real, &leeks[0], &identities));

        let by_turn: HashMap<String, bool> = [("3".to_string(), true)].into();
        assert!(is_dead(&by_turn, &leeks[0], &identities));

        let real_false_wins: HashMap<String, bool> =
            [("5".to_string(), false), ("3".to_string(), true)].into();
        assert!(!is_dead(&real_false_wins, &leeks[0], &identities));

        assert!(!is_dead(&HashMap::new(), &leeks[0], &identities));
    }

    #[test]
    fn farmers_last_write_wins_and_zero_is_skipped() {
        let leeks = vec![
            leek(0, "a", 1, Some(7)),
            leek(1, "b", 1, Some(0)),
            leek(2, "c", 1, None),
            leek(3, "d", 1, Some(7)),
        ];
        let team: Vec<&RawLeek> = leeks.iter().collect();
        let farmers = farmers_for_team(&team, None, 1_700_000_000);
        assert_eq!(farmers.len(), 1);
        let farmer = &farmers["7"];
        assert_eq!(farmer.id, 7);
        assert_eq!(farmer.name, "Farmer 7");
        assert_eq!(farmer.avatar_changed, 1_700_000_000);
        assert!(!farmer.muted);
    }

    #[test]
    fn farmer_name_comes_from_scenario_when_known() {
        let leeks = vec![leek(0, "a", 1, Some(7)), leek(1, "b", 1, Some(8))];
        let team: Vec<&RawLeek> = leeks.iter().collect();
        let scenario = ScenarioRecord {
            farmers: vec![ScenarioFarmer {
                id: 7,
                name: Some("Pilow".to_string()),
                extra: Map::new(),
            }],
            entities: Vec::new(),
        };
        let farmers = farmers_for_team(&team, Some(&scenario), 0);
        assert_eq!(farmers["7"].name, "Pilow");
        assert_eq!(farmers["8"].name, "Farmer 8");
    }

    #[test]
    fn team_names_fall_back_when_team_is_empty() {
        let leeks = vec![leek(0, "Solo", 1, None)];
        let (t1, t2) = partition_teams(&leeks);
        assert_eq!(team_name(&t1, "Team 1").as_deref(), Some("Solo"));
        assert_eq!(team_name(&t2, "Team 2").as_deref(), Some("Team 2"));
    }

    #[test]
    fn unnamed_first_leek_gives_no_team_name() {
        let leeks = vec![RawLeek {
            id: 0,
            team: Some(1),
            ..RawLeek::default()
        }];
        let (t1, _) = partition_teams(&leeks);
        assert_eq!(team_name(&t1, "Team 1"), None);
    }

    #[test]
    fn report_entries_carry_only_placeholder_progression() {
        let leeks = vec![leek(0, "a", 1, None)];
        let identities = resolve_identity(&leeks, None);
        let defaults = PlaceholderDefaults {
            appearance: 4,
            ..PlaceholderDefaults::default()
        };
        let entry = format_report_leek(&leeks[0], &identities, &HashMap::new(), &defaults);
        assert_eq!(entry.appearance, 4);
        assert_eq!(entry.level, Some(10));
        assert_eq!(
            (entry.xp, entry.cur_xp, entry.next_xp, entry.prev_xp, entry.money, entry.td),
            (0, 0, 0, 0, 0, 0)
        );
        assert!(entry.resources.is_empty());
        assert!(!entry.xp_locked);
    }

    #[test]
    fn top_leek_defaults_metal_and_face() {
        let leeks = vec![leek(0, "a", 1, Some(2))];
        let identities = IdentityMap::identity(&leeks);
        let top = format_top_leek(&leeks[0], &identities);
        assert!(!top.metal);
        assert_eq!(top.face, 0);
        assert!(top.weapon.is_none());
        assert!(top.title.is_empty());
        assert_eq!(top.farmer, Some(2));
    }
}
