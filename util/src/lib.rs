//! Unopinionated standalone utilities.

mod idm;
pub use self::idm::{directory_to_idm, load_idm};

pub mod text;
pub use text::StrExt;

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving map with an efficient hash function.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;

/// Insertion order preserving set with an efficient hash function.
pub type IndexSet<V> = indexmap::IndexSet<V, DefaultHashBuilder>;
