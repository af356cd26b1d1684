use serde::{Deserialize, Serialize};
use util::StrExt;

use crate::{LocationId, RangeMode};

/// User options for remote container access.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// How far away containers can be reached.
    pub range: RangeMode,

    /// Locations where remote access is turned off.
    ///
    /// `UndergroundMine` also covers every numbered mine level,
    /// `UndergroundMine1`, `UndergroundMine2` etc. Other entries only match
    /// the location with that exact name.
    pub disabled_in_locations: Vec<String>,

    /// Whether the shipping bin is treated as a container.
    pub enable_shipping_bin: bool,

    /// Show custom container names when hovering over them.
    pub show_hover_tooltips: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            range: RangeMode::Unlimited,
            disabled_in_locations: Vec::new(),
            enable_shipping_bin: true,
            show_hover_tooltips: true,
        }
    }
}

/// Name shared by the numbered mine levels.
const MINE_LEVELS: &str = "UndergroundMine";

impl Settings {
    pub fn is_disabled_in(&self, location: &LocationId) -> bool {
        self.disabled_in_locations.iter().any(|entry| {
            let entry = entry.trim();
            !entry.is_empty()
                && (location.as_str() == entry
                    || (entry == MINE_LEVELS
                        && location.is_numbered_variant_of(MINE_LEVELS)))
        })
    }
}
