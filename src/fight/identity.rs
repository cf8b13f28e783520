//! Turn id -> real id reconciliation.
//!
//! The generator numbers fighters per simulation; the scenario knows their stable
//! ids. The only link between the two is the fighter name, so matching is a
//! best-effort heuristic: exact name equality, first match wins, and anything
//! unmatched keeps its turn id.

use std::collections::HashMap;

use crate::data::raw_fight::{RawLeek, TurnId};
use crate::data::scenario::ScenarioEntity;

/// Stable entity id exposed in the response.
pub type RealId = i64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    ids: HashMap<TurnId, RealId>,
}

impl IdentityMap {
    /// Every turn id maps to itself.
    pub fn identity(raw_leeks: &[RawLeek]) -> Self {
        Self {
            ids: raw_leeks.iter().map(|leek| (leek.id, leek.id)).collect(),
        }
    }

    /// Real id for a turn id. Turn ids never seen while building the map resolve to themselves.
    pub fn real_id(&self, turn_id: TurnId) -> RealId {
        self.ids.get(&turn_id).copied().unwrap_or(turn_id)
    }
}

/// First entity (in iteration order) whose name equals `name`. Entities without an id
/// are skipped. Names are not required to be unique: on a collision the earliest
/// entity wins and later ones are never reachable by name.
pub fn find_by_name<'a, I>(entities: I, name: Option<&str>) -> Option<&'a ScenarioEntity>
where
    I: IntoIterator<Item = &'a ScenarioEntity>,
{
    entities
        .into_iter()
        .filter(|entity| entity.id.is_some())
        .find(|entity| entity.name.as_deref() == name)
}

/// Build the turn id -> real id map for one fight.
///
/// With `scenario_entities` absent every leek keeps its turn id. With entities
/// present each leek takes the id of the first same-named entity, in the order the
/// entities are given (team order, then roster order), or keeps its turn id.
pub fn resolve_identity(
    raw_leeks: &[RawLeek],
    scenario_entities: Option<&[&ScenarioEntity]>,
) -> IdentityMap {
    let Some(entities) = scenario_entities else {
        return IdentityMap::identity(raw_leeks);
    };

    let ids = raw_leeks
        .iter()
        .map(|leek| {
            let real = find_by_name(entities.iter().copied(), leek.name.as_deref())
                .and_then(|entity| entity.id)
                .unwrap_or(leek.id);
            (leek.id, real)
        })
        .collect();
    IdentityMap { ids }
}
