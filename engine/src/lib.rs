//! Container discovery and access scoping.
//!
//! Works out which storage containers in the host world the player can
//! currently reach and in what order to present them.

mod access;
pub use access::{
    hover_label, open_menu, overlay, player_range, OpenOutcome, Overlay,
};

mod container;
pub use container::{ContainerKind, Footprint, ManagedContainer};

mod factory;
pub use factory::ContainerFactory;

pub mod host;
pub use host::{ContainerId, Host, OpenMenu, Worldfile};

pub mod prelude;

mod range;
pub use range::RangeHandler;

mod registry;
pub use registry::{Candidate, ContainerRegistry};
