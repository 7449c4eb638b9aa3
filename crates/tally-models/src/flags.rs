//! Persisted flag state snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::ItemId;

/// Mapping from normalized item id to a boolean flag.
///
/// An absent key reads as `false`, so an empty map is a valid state for a
/// store that has never been written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagMap(BTreeMap<String, bool>);

impl FlagMap {
    /// Creates an empty flag map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flag for an item; absent keys read as `false`.
    pub fn is_set(&self, id: &ItemId) -> bool {
        self.0.get(id.as_str()).copied().unwrap_or(false)
    }

    /// Sets or clears the flag for an item.
    ///
    /// A `false` value removes the key, keeping the map equivalent to its
    /// absent-means-false reading.
    pub fn set(&mut self, id: &ItemId, value: bool) {
        if value {
            self.0.insert(id.as_str().to_string(), true);
        } else {
            self.0.remove(id.as_str());
        }
    }

    /// Number of set flags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no flags are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over set flag keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, bool)> for FlagMap {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Immutable snapshot of both persisted stores, handed to the metrics core.
///
/// The core only ever reads snapshots; all writes go through the flag
/// store in `tally-persistence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Per-item completion flags.
    pub completion: FlagMap,
    /// Per-item ignore flags.
    pub ignore: FlagMap,
}

impl StateSnapshot {
    /// Creates a snapshot from both flag maps.
    pub fn new(completion: FlagMap, ignore: FlagMap) -> Self {
        Self { completion, ignore }
    }
}
