use serde::Deserialize;
use serde_with::SerializeDisplay;
use strum::{Display, EnumIter, EnumString};

/// How far away from the player containers can be reached.
///
/// Variants are ordered from most to least restrictive.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    EnumIter,
    EnumString,
    SerializeDisplay,
    Deserialize,
)]
#[serde(from = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum RangeMode {
    /// Remote access is off.
    None,
    /// Only containers in the location the player is in.
    CurrentLocation,
    /// Containers in any location in the same world area as the player.
    #[strum(to_string = "same-world-area", serialize = "current-world-area")]
    SameWorldArea,
    /// Every container in the world.
    #[default]
    Unlimited,
}

impl From<String> for RangeMode {
    /// Unrecognized values fall back to `None`.
    fn from(value: String) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            log::warn!("unknown range mode {value:?}, remote access disabled");
            RangeMode::None
        })
    }
}
