use std::fmt;

use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};
use world::{ContainerKey, Location};

#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    #[default]
    Ordinary,
    /// There is only ever one shipping bin in the world, but it can be
    /// reachable from several places.
    ShippingBin,
}

/// Rectangle of tiles a container covers in its location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Footprint {
    pub origin: IVec2,
    pub size: IVec2,
}

impl Footprint {
    /// Footprints are at least one tile in each dimension.
    pub fn new(origin: IVec2, size: IVec2) -> Self {
        Footprint {
            origin,
            size: size.max(ivec2(1, 1)),
        }
    }

    /// Single-tile footprint.
    pub fn tile(origin: IVec2) -> Self {
        Footprint::new(origin, ivec2(1, 1))
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        let end = ivec2(
            self.origin.x.saturating_add(self.size.x),
            self.origin.y.saturating_add(self.size.y),
        );
        pos.x >= self.origin.x
            && pos.y >= self.origin.y
            && pos.x < end.x
            && pos.y < end.y
    }
}

/// A container in the host world together with the user's metadata for it.
///
/// Constructed fresh for every query, the host world owns the actual
/// container and `handle` only refers to it.
#[derive(Clone, Debug)]
pub struct ManagedContainer<H> {
    pub handle: H,
    pub key: ContainerKey,
    pub kind: ContainerKind,
    pub location: Location,
    pub footprint: Footprint,
    /// Display name, either the custom name or a generated default.
    pub name: String,
    pub hidden: bool,
    pub(crate) custom_name: bool,
}

impl<H: Eq> ManagedContainer<H> {
    /// Identity comparison against a host handle. Names are not unique, so
    /// never compare containers by name.
    pub fn is_same_as(&self, handle: &H) -> bool {
        &self.handle == handle
    }
}

impl<H> ManagedContainer<H> {
    /// The user hasn't given this container a name.
    pub fn has_default_name(&self) -> bool {
        !self.custom_name
    }

    pub fn is_shipping_bin(&self) -> bool {
        self.kind == ContainerKind::ShippingBin
    }
}

impl<H> fmt::Display for ManagedContainer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn footprint_bounds() {
        let bin = Footprint::new(ivec2(71, 13), ivec2(2, 1));
        assert!(bin.contains(ivec2(71, 13)));
        assert!(bin.contains(ivec2(72, 13)));
        assert!(!bin.contains(ivec2(73, 13)));
        assert!(!bin.contains(ivec2(71, 14)));
        assert!(!bin.contains(ivec2(70, 13)));

        let far = Footprint::tile(ivec2(-5, -5));
        assert!(!far.contains(ivec2(i32::MAX, 0)));
        assert!(!far.contains(ivec2(0, i32::MAX)));
        let edge = Footprint::new(ivec2(i32::MAX - 1, i32::MIN), ivec2(4, 2));
        assert!(edge.contains(ivec2(i32::MAX - 1, i32::MIN)));
        assert!(edge.contains(ivec2(i32::MAX - 1, i32::MIN + 1)));
        assert!(!edge.contains(ivec2(i32::MIN, i32::MIN)));

        let degenerate = Footprint::new(ivec2(0, 0), ivec2(0, -4));
        assert_eq!(degenerate, Footprint::tile(ivec2(0, 0)));
        assert!(degenerate.contains(ivec2(0, 0)));
    }
}
