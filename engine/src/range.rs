use std::sync::Arc;

use world::{LocationId, RangeMode, WorldAreaIndex};

/// Scope of a single discovery pass.
///
/// Combines the range mode, the player's current location and a snapshot of
/// the world area index. Immutable once built, so a pass never sees the
/// area configuration change under it.
#[derive(Clone, Debug)]
pub struct RangeHandler {
    mode: RangeMode,
    current: LocationId,
    areas: Arc<WorldAreaIndex>,
}

impl RangeHandler {
    pub fn new(
        mode: RangeMode,
        current: impl Into<LocationId>,
        areas: Arc<WorldAreaIndex>,
    ) -> Self {
        RangeHandler {
            mode,
            current: current.into(),
            areas,
        }
    }

    pub fn current_mode(&self) -> RangeMode {
        self.mode
    }

    pub fn current_location(&self) -> &LocationId {
        &self.current
    }

    pub fn areas(&self) -> &WorldAreaIndex {
        &self.areas
    }

    /// Can containers at `location` be reached.
    pub fn in_scope(&self, location: &LocationId) -> bool {
        match self.mode {
            RangeMode::None => false,
            RangeMode::CurrentLocation => location == &self.current,
            RangeMode::SameWorldArea => {
                // A location outside every area is only its own neighborhood.
                if location == &self.current {
                    return true;
                }
                match (
                    self.areas.area_of(&self.current),
                    self.areas.area_of(location),
                ) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            RangeMode::Unlimited => true,
        }
    }
}

#[cfg(test)]
mod test {
    use world::WorldAreas;

    use super::*;

    fn areas() -> Arc<WorldAreaIndex> {
        let config: WorldAreas =
            [("Outdoors", vec!["Farm", "FarmHouse"]), ("Town", vec!["Town"])]
                .into_iter()
                .collect();
        Arc::new(WorldAreaIndex::new(&config))
    }

    fn reach(mode: RangeMode, from: &str, to: &str) -> bool {
        RangeHandler::new(mode, from, areas()).in_scope(&to.into())
    }

    #[test]
    fn none_reaches_nothing() {
        assert!(!reach(RangeMode::None, "Farm", "Farm"));
        assert!(!reach(RangeMode::None, "Farm", "Town"));
    }

    #[test]
    fn current_location() {
        assert!(reach(RangeMode::CurrentLocation, "Farm", "Farm"));
        assert!(!reach(RangeMode::CurrentLocation, "Farm", "FarmHouse"));
    }

    #[test]
    fn same_world_area() {
        use RangeMode::SameWorldArea;
        assert!(reach(SameWorldArea, "Farm", "FarmHouse"));
        assert!(reach(SameWorldArea, "FarmHouse", "Farm"));
        assert!(!reach(SameWorldArea, "Farm", "Town"));
        assert!(!reach(SameWorldArea, "Farm", "Mine1"));

        // Unassigned locations only reach themselves.
        assert!(reach(SameWorldArea, "Mine1", "Mine1"));
        assert!(!reach(SameWorldArea, "Mine1", "Mine2"));
        assert!(!reach(SameWorldArea, "Mine1", "Farm"));
    }

    #[test]
    fn unlimited() {
        assert!(reach(RangeMode::Unlimited, "Farm", "Mine1"));
        assert!(reach(RangeMode::Unlimited, "Mine1", "Town"));
    }

    #[test]
    fn accessors() {
        let range =
            RangeHandler::new(RangeMode::SameWorldArea, "Farm", areas());
        assert_eq!(range.current_mode(), RangeMode::SameWorldArea);
        assert_eq!(range.current_location(), &LocationId::from("Farm"));
        assert_eq!(range.areas().areas().count(), 2);
    }
}
