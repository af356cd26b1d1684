//! Persisted world layout and user configuration.

mod area;
pub use area::{
    AreaConflict, AreaId, SharedAreaIndex, WorldAreaIndex, WorldAreas,
};

mod container;
pub use container::{ContainerData, ContainerKey, ContainerMeta};

mod data;
pub use data::Data;

mod location;
pub use location::{Location, LocationId};

mod range;
pub use range::RangeMode;

mod settings;
pub use settings::Settings;
