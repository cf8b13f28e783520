//! Fight reconciliation: identity matching, team partitioning and projection of a
//! raw generator record into the client's fight response.

pub mod defaults;
pub mod identity;
pub mod projector;
pub mod response;

pub use defaults::PlaceholderDefaults;
pub use identity::{find_by_name, resolve_identity, IdentityMap, RealId};
pub use projector::{
    farmers_for_team, format_report_leek, format_top_leek, is_dead, normalize_winner,
    partition_teams, team_name, FightProjector,
};
pub use response::{FarmerSummary, FightData, FightResponse, Report, ReportLeek, TopLeek};
