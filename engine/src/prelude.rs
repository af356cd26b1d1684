pub use crate::{
    ContainerFactory, ContainerId, ContainerKind, ContainerRegistry,
    Footprint, Host, ManagedContainer, OpenOutcome, RangeHandler,
};
pub use glam::{ivec2, IVec2};
pub use util::{HashMap, IndexMap, IndexSet};
pub use world::{Data, Location, LocationId, RangeMode, Settings};
