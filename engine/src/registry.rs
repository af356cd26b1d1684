use std::{fmt::Debug, hash::Hash};

use world::{Location, LocationId};

use crate::{ContainerKind, Footprint};

/// One container reference reported by the host world.
#[derive(Clone, Debug)]
pub struct Candidate<H> {
    pub handle: H,
    pub location: LocationId,
    pub footprint: Footprint,
    pub kind: ContainerKind,
}

/// Interface to the host world that owns the containers.
///
/// Implementations report live state, every call to `all_containers`
/// enumerates the world anew. Filtering and ordering are not the
/// registry's job.
pub trait ContainerRegistry {
    /// Non-owning reference to a host container, compared by identity.
    type Handle: Copy + Eq + Hash + Debug;

    /// A storage menu the host is currently displaying.
    type Menu;

    /// Every container in the world.
    ///
    /// The host may report the same container more than once if it's
    /// reachable from several places.
    fn all_containers(
        &self,
    ) -> impl Iterator<Item = Candidate<Self::Handle>> + '_;

    /// Look up a location, `None` if it no longer exists.
    fn location(&self, id: &LocationId) -> Option<Location>;

    /// The container a menu was opened from, if any and if it still exists.
    fn menu_source(&self, menu: &Self::Menu) -> Option<Self::Handle>;
}
