//! Constants for response fields the generator does not produce.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderDefaults {
    pub year: i32,
    pub fight_type: i32,
    pub context: i32,
    pub status: i32,
    pub tournament: i64,
    pub views: i64,
    pub seed: i64,
    pub bonus: i64,
    /// Appearance code stamped on every report entry.
    pub appearance: i32,
    pub team1_fallback_name: String,
    pub team2_fallback_name: String,
}

impl Default for PlaceholderDefaults {
    fn default() -> Self {
        Self {
            year: 2026,
            fight_type: 0,
            context: 3,
            status: 2,
            tournament: 0,
            views: 0,
            seed: 0,
            bonus: 0,
            appearance: 9,
            team1_fallback_name: "Team 1".to_string(),
            team2_fallback_name: "Team 2".to_string(),
        }
    }
}
