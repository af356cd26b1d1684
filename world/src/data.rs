use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{ContainerData, Settings, WorldAreaIndex, WorldAreas};

/// Everything the user has configured.
///
/// Loads either from a single IDM file or from a directory where each of
/// `settings.idm`, `world-areas.idm` and `containers.idm` holds one field.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Data {
    pub settings: Settings,
    pub world_areas: WorldAreas,
    pub containers: ContainerData,
}

impl Data {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Data> {
        let path = path.as_ref();
        let data: Data = util::load_idm(path).with_context(|| {
            format!("loading settings from {}", path.display())
        })?;
        log::debug!(
            "loaded {} world areas and {} container entries from {}",
            data.world_areas.iter().count(),
            data.containers.len(),
            path.display()
        );
        Ok(data)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, idm::to_string(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Build the area index, warning about locations listed in more than
    /// one area.
    pub fn area_index(&self) -> WorldAreaIndex {
        let index = WorldAreaIndex::new(&self.world_areas);
        for c in index.conflicts() {
            log::warn!(
                "location {} is listed in both {} and {}, using {}",
                c.location,
                c.kept,
                c.ignored,
                c.kept
            );
        }
        index
    }
}
