//! Named groupings of locations.

use std::sync::Arc;

use derive_more::{Deref, Display, From};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use util::{HashMap, IndexMap, IndexSet};

use crate::LocationId;

/// Identifier of a world area, also its display name.
#[derive(
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Deref,
    Display,
    From,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct AreaId(String);

impl From<&str> for AreaId {
    fn from(value: &str) -> Self {
        AreaId(value.to_string())
    }
}

/// User-configured world areas, area names mapped to their member
/// locations in configuration order.
///
/// Nothing stops a location from being listed under several areas here,
/// `WorldAreaIndex` resolves that.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldAreas(IndexMap<AreaId, IndexSet<LocationId>>);

impl WorldAreas {
    pub fn insert(
        &mut self,
        area: impl Into<AreaId>,
        locations: impl IntoIterator<Item = impl Into<LocationId>>,
    ) {
        self.0
            .entry(area.into())
            .or_default()
            .extend(locations.into_iter().map(Into::into));
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&AreaId, &IndexSet<LocationId>)> + '_ {
        self.0.iter()
    }
}

impl<A: Into<AreaId>, L: Into<LocationId>> FromIterator<(A, Vec<L>)>
    for WorldAreas
{
    fn from_iter<T: IntoIterator<Item = (A, Vec<L>)>>(iter: T) -> Self {
        let mut ret = WorldAreas::default();
        for (area, locations) in iter {
            ret.insert(area, locations);
        }
        ret
    }
}

/// A location was listed under more than one area.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AreaConflict {
    pub location: LocationId,
    /// The area the location was assigned to.
    pub kept: AreaId,
    /// The later area whose listing was ignored.
    pub ignored: AreaId,
}

/// Lookup structure between locations and the world areas they belong to.
///
/// A location belongs to at most one area. When the configuration lists a
/// location under several areas, the first area wins and the rest are
/// recorded in `conflicts`.
#[derive(Clone, Default, Debug)]
pub struct WorldAreaIndex {
    areas: IndexMap<AreaId, IndexSet<LocationId>>,
    by_location: HashMap<LocationId, AreaId>,
    conflicts: Vec<AreaConflict>,
}

impl WorldAreaIndex {
    pub fn new(config: &WorldAreas) -> Self {
        let mut ret = WorldAreaIndex::default();
        for (area, locations) in config.iter() {
            // Keep empty areas around, they're still valid area names.
            ret.areas.entry(area.clone()).or_default();
            for loc in locations {
                ret.assign(loc.clone(), area.clone());
            }
        }
        ret
    }

    fn assign(&mut self, location: LocationId, area: AreaId) {
        if let Some(kept) = self.by_location.get(&location) {
            if kept != &area {
                self.conflicts.push(AreaConflict {
                    location,
                    kept: kept.clone(),
                    ignored: area,
                });
            }
            return;
        }
        self.areas
            .entry(area.clone())
            .or_default()
            .insert(location.clone());
        self.by_location.insert(location, area);
    }

    pub fn area_of(&self, location: &LocationId) -> Option<&AreaId> {
        self.by_location.get(location)
    }

    pub fn locations_in(
        &self,
        area: &AreaId,
    ) -> impl Iterator<Item = &LocationId> + '_ {
        self.areas.get(area).into_iter().flatten()
    }

    /// Configured area names in configuration order.
    pub fn areas(&self) -> impl Iterator<Item = &AreaId> + '_ {
        self.areas.keys()
    }

    pub fn conflicts(&self) -> &[AreaConflict] {
        &self.conflicts
    }

    /// Return a copy of the index with `location` moved to `area`, or
    /// removed from all areas if `area` is `None`.
    pub fn with_assignment(
        &self,
        location: &LocationId,
        area: Option<AreaId>,
    ) -> Self {
        let mut ret = self.clone();
        if let Some(old) = ret.by_location.remove(location) {
            if let Some(set) = ret.areas.get_mut(&old) {
                set.shift_remove(location);
            }
        }
        if let Some(area) = area {
            ret.assign(location.clone(), area);
        }
        ret
    }

    /// Convert back into the configuration form, without the conflicting
    /// listings.
    pub fn to_config(&self) -> WorldAreas {
        WorldAreas(self.areas.clone())
    }
}

/// Process-wide world area index that can be updated while queries are
/// running.
///
/// Readers take a snapshot and keep using it for the whole query, an update
/// swaps in a complete new index. A query sees either the old or the new
/// mapping, never a mix.
#[derive(Default, Debug)]
pub struct SharedAreaIndex(RwLock<Arc<WorldAreaIndex>>);

impl SharedAreaIndex {
    pub fn new(index: WorldAreaIndex) -> Self {
        SharedAreaIndex(RwLock::new(Arc::new(index)))
    }

    pub fn snapshot(&self) -> Arc<WorldAreaIndex> {
        self.0.read().clone()
    }

    pub fn replace(&self, index: WorldAreaIndex) {
        *self.0.write() = Arc::new(index);
    }

    /// Move a single location to another area, or out of all areas.
    pub fn reassign(&self, location: &LocationId, area: Option<AreaId>) {
        let mut current = self.0.write();
        let next = current.with_assignment(location, area);
        *current = Arc::new(next);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn areas() -> WorldAreas {
        [
            ("Outdoors", vec!["Farm", "FarmHouse", "Forest"]),
            ("Town", vec!["Town", "Forest"]),
            ("Empty", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn first_listing_wins() {
        let index = WorldAreaIndex::new(&areas());
        assert_eq!(
            index.area_of(&"Forest".into()),
            Some(&AreaId::from("Outdoors"))
        );
        assert_eq!(
            index.conflicts(),
            &[AreaConflict {
                location: "Forest".into(),
                kept: "Outdoors".into(),
                ignored: "Town".into(),
            }]
        );
        let town: Vec<&LocationId> =
            index.locations_in(&"Town".into()).collect();
        assert_eq!(town, vec![&LocationId::from("Town")]);
    }

    #[test]
    fn unknown_names() {
        let index = WorldAreaIndex::new(&areas());
        assert_eq!(index.area_of(&"Mine1".into()), None);
        assert_eq!(index.locations_in(&"Nowhere".into()).count(), 0);
        assert_eq!(index.locations_in(&"Empty".into()).count(), 0);
        assert_eq!(index.areas().count(), 3);
    }

    #[test]
    fn reassignment_is_all_or_nothing() {
        let shared = SharedAreaIndex::new(WorldAreaIndex::new(&areas()));
        let before = shared.snapshot();

        shared.reassign(&"Farm".into(), Some("Town".into()));
        let after = shared.snapshot();

        // The earlier snapshot is untouched.
        assert_eq!(
            before.area_of(&"Farm".into()),
            Some(&AreaId::from("Outdoors"))
        );
        assert_eq!(before.locations_in(&"Outdoors".into()).count(), 3);

        assert_eq!(
            after.area_of(&"Farm".into()),
            Some(&AreaId::from("Town"))
        );
        assert_eq!(after.locations_in(&"Outdoors".into()).count(), 2);
        assert_eq!(after.locations_in(&"Town".into()).count(), 2);

        shared.reassign(&"Farm".into(), None);
        assert_eq!(shared.snapshot().area_of(&"Farm".into()), None);
    }

    #[test]
    fn config_round_trip_drops_conflicts() {
        let index = WorldAreaIndex::new(&areas());
        let again = WorldAreaIndex::new(&index.to_config());
        assert!(again.conflicts().is_empty());
        assert_eq!(
            again.area_of(&"Forest".into()),
            Some(&AreaId::from("Outdoors"))
        );
    }
}
