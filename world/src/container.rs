//! Persisted per-container metadata.

use std::{fmt, str::FromStr};

use anyhow::{bail, Context};
use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use util::IndexMap;

use crate::LocationId;

/// Stable identity of a container across sessions.
///
/// Ordinary containers are identified by their location and the tile they
/// stand on. The shipping bin is a singleton and has a fixed key.
#[derive(
    Clone, Eq, PartialEq, Hash, Debug, DeserializeFromStr, SerializeDisplay,
)]
pub enum ContainerKey {
    ShippingBin,
    Tile(LocationId, IVec2),
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKey::ShippingBin => write!(f, "shipping-bin"),
            ContainerKey::Tile(loc, pos) => {
                write!(f, "{loc}:{},{}", pos.x, pos.y)
            }
        }
    }
}

impl FromStr for ContainerKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "shipping-bin" {
            return Ok(ContainerKey::ShippingBin);
        }

        let Some((loc, pos)) = s.rsplit_once(':') else {
            bail!("bad container key {s:?}, expected location:x,y");
        };
        let Some((x, y)) = pos.split_once(',') else {
            bail!("bad container position in {s:?}");
        };
        if loc.is_empty() {
            bail!("container key {s:?} has no location");
        }
        let x = x.trim().parse().with_context(|| format!("in {s:?}"))?;
        let y = y.trim().parse().with_context(|| format!("in {s:?}"))?;

        Ok(ContainerKey::Tile(loc.into(), ivec2(x, y)))
    }
}

/// User-assigned container data.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContainerMeta {
    /// Custom name, empty if the container uses its default name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Hidden containers are left out of container lists.
    pub hidden: bool,
}

impl ContainerMeta {
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// Metadata for all containers the user has customized.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerData(IndexMap<ContainerKey, ContainerMeta>);

impl ContainerData {
    pub fn get(&self, key: &ContainerKey) -> Option<&ContainerMeta> {
        self.0.get(key)
    }

    pub fn custom_name(&self, key: &ContainerKey) -> Option<&str> {
        self.get(key)
            .map(|m| m.name.as_str())
            .filter(|n| !n.is_empty())
    }

    pub fn is_hidden(&self, key: &ContainerKey) -> bool {
        self.get(key).is_some_and(|m| m.hidden)
    }

    /// Give a container a custom name, a blank name resets it to the
    /// default.
    pub fn rename(&mut self, key: ContainerKey, name: &str) {
        self.update(key, |m| m.name = name.trim().to_string());
    }

    pub fn set_hidden(&mut self, key: ContainerKey, hidden: bool) {
        self.update(key, |m| m.hidden = hidden);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn update(
        &mut self,
        key: ContainerKey,
        f: impl FnOnce(&mut ContainerMeta),
    ) {
        let meta = self.0.entry(key.clone()).or_default();
        f(meta);
        // Don't keep entries that don't say anything.
        if meta.is_default() {
            self.0.shift_remove(&key);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_strings() {
        let key = ContainerKey::Tile("Farm".into(), ivec2(10, -3));
        assert_eq!(key.to_string(), "Farm:10,-3");
        assert_eq!("Farm:10,-3".parse::<ContainerKey>().unwrap(), key);
        assert_eq!(
            "shipping-bin".parse::<ContainerKey>().unwrap(),
            ContainerKey::ShippingBin
        );

        assert!("Farm".parse::<ContainerKey>().is_err());
        assert!("Farm:10".parse::<ContainerKey>().is_err());
        assert!(":1,2".parse::<ContainerKey>().is_err());
        assert!("Farm:a,2".parse::<ContainerKey>().is_err());
    }

    #[test]
    fn editing() {
        let key = ContainerKey::Tile("Farm".into(), ivec2(1, 2));
        let mut data = ContainerData::default();

        data.rename(key.clone(), "  Seeds ");
        assert_eq!(data.custom_name(&key), Some("Seeds"));
        assert!(!data.is_hidden(&key));

        data.set_hidden(key.clone(), true);
        assert!(data.is_hidden(&key));

        data.rename(key.clone(), "");
        assert_eq!(data.custom_name(&key), None);
        assert_eq!(data.len(), 1);

        data.set_hidden(key.clone(), false);
        assert!(data.is_empty());
    }
}
