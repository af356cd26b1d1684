//! Self-contained host world for running the engine without a game.

use std::fmt;

use derive_more::Deref;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use util::IndexMap;
use world::{Location, LocationId};

use crate::{Candidate, ContainerKind, ContainerRegistry, Footprint};

/// Host-side container identifier. Copies of it all refer to the same
/// container, which lives in the host's ECS.
#[derive(Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug, Deref)]
pub struct ContainerId(hecs::Entity);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.id())
    }
}

/// Where a container stands.
#[derive(Clone, Debug)]
struct Placed {
    location: LocationId,
    footprint: Footprint,
}

/// A storage menu the host is showing.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct OpenMenu {
    /// The container the menu was opened from, `None` for menus that show
    /// some other inventory.
    pub context: Option<ContainerId>,
}

/// Host world with locations and the containers in them.
#[derive(Default)]
pub struct Host {
    ecs: hecs::World,
    locations: IndexMap<LocationId, Location>,
    /// The shipping bin once spawned.
    shipping_bin: Option<ContainerId>,
    /// Other places the shipping bin can also be reached from.
    bin_aliases: Vec<Placed>,
}

impl Host {
    pub fn new(w: &Worldfile) -> Self {
        let mut ret = Host::default();
        for (id, spec) in &w.locations {
            let name = if spec.name.is_empty() {
                id.to_string()
            } else {
                spec.name.clone()
            };
            ret.add_location(id.clone(), name);
            for c in &spec.containers {
                ret.spawn(id.clone(), Footprint::new(c.at, c.size), c.kind);
            }
        }
        ret
    }

    pub fn add_location(
        &mut self,
        id: impl Into<LocationId>,
        name: impl Into<String>,
    ) {
        let loc = Location::new(id, name);
        self.locations.insert(loc.id.clone(), loc);
    }

    /// Remove a location, its containers are left dangling.
    pub fn remove_location(&mut self, id: &str) {
        self.locations.shift_remove(&LocationId::from(id));
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.values()
    }

    /// Put a container in the world.
    ///
    /// Spawning a second shipping bin doesn't create a new one, instead the
    /// existing bin becomes reachable from the new spot too.
    pub fn spawn(
        &mut self,
        location: impl Into<LocationId>,
        footprint: Footprint,
        kind: ContainerKind,
    ) -> ContainerId {
        let placed = Placed {
            location: location.into(),
            footprint,
        };

        if kind == ContainerKind::ShippingBin {
            if let Some(bin) = self.shipping_bin {
                self.bin_aliases.push(placed);
                return bin;
            }
        }

        let id = ContainerId(self.ecs.spawn((placed, kind)));
        if kind == ContainerKind::ShippingBin {
            self.shipping_bin = Some(id);
        }
        id
    }

    /// Remove a container, return whether it existed.
    pub fn despawn(&mut self, id: ContainerId) -> bool {
        if self.shipping_bin == Some(id) {
            self.shipping_bin = None;
            self.bin_aliases.clear();
        }
        self.ecs.despawn(id.0).is_ok()
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.ecs.contains(id.0)
    }

    /// Open the storage menu for a container.
    pub fn open(&self, id: ContainerId) -> OpenMenu {
        OpenMenu { context: Some(id) }
    }
}

impl ContainerRegistry for Host {
    type Handle = ContainerId;
    type Menu = OpenMenu;

    fn all_containers(
        &self,
    ) -> impl Iterator<Item = Candidate<ContainerId>> + '_ {
        let mut ret: Vec<Candidate<ContainerId>> = self
            .ecs
            .query::<(&Placed, &ContainerKind)>()
            .iter()
            .map(|(e, (placed, kind))| Candidate {
                handle: ContainerId(e),
                location: placed.location.clone(),
                footprint: placed.footprint,
                kind: *kind,
            })
            .collect();

        // ECS order shifts around when things get despawned, report in
        // location order and then by scanline position instead.
        ret.sort_by_key(|c| {
            (
                self.locations
                    .get_index_of(&c.location)
                    .unwrap_or(usize::MAX),
                c.footprint.origin.y,
                c.footprint.origin.x,
            )
        });

        if let Some(bin) = self.shipping_bin {
            ret.extend(self.bin_aliases.iter().map(|p| Candidate {
                handle: bin,
                location: p.location.clone(),
                footprint: p.footprint,
                kind: ContainerKind::ShippingBin,
            }));
        }

        ret.into_iter()
    }

    fn location(&self, id: &LocationId) -> Option<Location> {
        self.locations.get(id).cloned()
    }

    fn menu_source(&self, menu: &OpenMenu) -> Option<ContainerId> {
        menu.context.filter(|&id| self.contains(id))
    }
}

/// Serialized host world description.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Worldfile {
    /// Where the player is standing.
    pub player: LocationId,
    /// The player is a secondary player in a shared world.
    pub guest: bool,
    pub locations: IndexMap<LocationId, LocationSpec>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocationSpec {
    /// Display name, defaults to the location id.
    pub name: String,
    pub containers: Vec<ContainerSpec>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContainerSpec {
    pub at: IVec2,
    /// Footprint size, single tile if left out.
    pub size: IVec2,
    pub kind: ContainerKind,
}

impl Worldfile {
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        util::load_idm(path)
    }
}
