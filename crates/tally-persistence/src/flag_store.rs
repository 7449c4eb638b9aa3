//! Flag store for completion and ignore state.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_models::{FlagMap, ItemId, StateSnapshot};

use crate::atomic::{read_json_optional, write_json};
use crate::error::Result;

/// The two persisted flag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// The item has been done.
    Completed,
    /// The item is excluded from the eligible count.
    Ignored,
}

impl FlagKind {
    fn file_name(&self) -> &'static str {
        match self {
            FlagKind::Completed => "completed.json",
            FlagKind::Ignored => "ignored.json",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Completed => write!(f, "completed"),
            FlagKind::Ignored => write!(f, "ignored"),
        }
    }
}

/// On-disk payload for one flag kind.
#[derive(Debug, Serialize, Deserialize)]
struct FlagFile {
    /// When this file was last written.
    updated_at: DateTime<Utc>,
    /// The flag map; only `true` entries are stored.
    #[serde(default)]
    flags: FlagMap,
}

/// Manages persistence of per-item flags.
///
/// Each flag kind lives in its own JSON file:
/// ```text
/// base_path/
/// └── flags/
///     ├── completed.json
///     └── ignored.json
/// ```
///
/// A missing file reads as an empty map: a store that has never been
/// written means nothing completed and nothing ignored.
pub struct FlagStore {
    base_path: PathBuf,
    /// Serializes read-modify-write cycles in [`FlagStore::set`].
    write_lock: Mutex<()>,
}

impl FlagStore {
    /// Creates a new FlagStore rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn flag_path(&self, kind: FlagKind) -> PathBuf {
        self.base_path.join("flags").join(kind.file_name())
    }

    /// Loads the flag map for one kind.
    pub fn load(&self, kind: FlagKind) -> Result<FlagMap> {
        let file: Option<FlagFile> = read_json_optional(&self.flag_path(kind))?;
        Ok(file.map(|f| f.flags).unwrap_or_default())
    }

    /// Sets or clears one flag, read-modify-write.
    ///
    /// Clearing removes the key entirely; the file only ever holds `true`
    /// entries.
    pub fn set(&self, kind: FlagKind, id: &ItemId, value: bool) -> Result<()> {
        // A poisoned lock only means another writer panicked mid-set; the
        // file itself stays consistent thanks to the atomic rename.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut flags = self.load(kind)?;
        flags.set(id, value);

        let file = FlagFile {
            updated_at: Utc::now(),
            flags,
        };
        write_json(&self.flag_path(kind), &file)
    }

    /// Loads both flag maps as one immutable snapshot.
    ///
    /// This is the read the metrics core consumes; it either yields both
    /// maps or fails, never a half-loaded state.
    pub fn snapshot(&self) -> Result<StateSnapshot> {
        let completion = self.load(FlagKind::Completed)?;
        let ignore = self.load(FlagKind::Ignored)?;
        Ok(StateSnapshot::new(completion, ignore))
    }
}
