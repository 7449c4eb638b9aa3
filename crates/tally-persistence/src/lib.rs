//! Persistence layer for Tally.
//!
//! This crate owns the two boundary collaborators of the metrics core: the
//! catalog loader and the persisted completion/ignore flag stores. Flag
//! writes are crash-safe (write to a temp file, then rename) and reads
//! always produce a complete snapshot, so the core never computes against
//! partially loaded state.
//!
//! # Example
//!
//! ```no_run
//! use tally_models::ItemId;
//! use tally_persistence::{load_catalog, FlagKind, FlagStore};
//!
//! let catalog = load_catalog("checklist.json".as_ref()).unwrap();
//! let store = FlagStore::new("/home/user/.local/share/tally");
//!
//! store
//!     .set(FlagKind::Completed, &ItemId::normalize("Use MFA"), true)
//!     .unwrap();
//!
//! let snapshot = store.snapshot().unwrap();
//! assert!(snapshot.completion.is_set(&ItemId::normalize("Use MFA")));
//! # let _ = catalog;
//! ```

pub mod atomic;
pub mod catalog;
pub mod error;
pub mod flag_store;

pub use catalog::load_catalog;
pub use error::{PersistenceError, Result};
pub use flag_store::{FlagKind, FlagStore};
