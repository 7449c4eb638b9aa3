//! Application state shared across handlers.

use std::sync::Arc;

use tracing::info;

use tally_models::{Catalog, StateSnapshot};
use tally_persistence::{load_catalog, FlagStore, PersistenceError};

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// The catalog is loaded once before the server starts taking requests;
/// flag state is re-read per request so every computation runs against one
/// complete, immutable snapshot.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// The checklist catalog, fixed for the process lifetime.
    pub catalog: Arc<Catalog>,
    /// Persisted completion/ignore flags.
    pub flag_store: Arc<FlagStore>,
}

impl AppState {
    /// Creates an AppState from already-built components (tests).
    pub fn new(config: ApiConfig, catalog: Catalog, flag_store: FlagStore) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            flag_store: Arc::new(flag_store),
        }
    }

    /// Loads the catalog and opens the flag store per the configuration.
    ///
    /// Serving must not begin until this returns: it is the gate that
    /// guarantees handlers only ever compute against fully loaded inputs.
    pub fn load(config: ApiConfig) -> Result<Self, PersistenceError> {
        let catalog = load_catalog(&config.catalog_path)?;
        info!(
            sections = catalog.sections.len(),
            items = catalog.item_count(),
            "catalog loaded"
        );

        let flag_store = FlagStore::new(&config.state_dir);
        Ok(Self::new(config, catalog, flag_store))
    }

    /// Reads one complete flag snapshot.
    pub fn snapshot(&self) -> Result<StateSnapshot, PersistenceError> {
        self.flag_store.snapshot()
    }
}
