use std::fmt;

use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

/// Stable identifier of a location in the host world.
///
/// This is the location's internal name, which stays the same across
/// sessions and is what configuration files refer to.
#[derive(
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Deref,
    Display,
    From,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct LocationId(String);

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        LocationId(value.to_string())
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A location as reported by the host world.
///
/// Locations compare equal when their identifiers do, the display name is
/// presentation data only.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Location {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
