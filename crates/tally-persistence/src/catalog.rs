//! Catalog loading and validation.

use std::collections::HashMap;
use std::path::Path;

use tally_models::Catalog;

use crate::atomic::read_json;
use crate::error::{PersistenceError, Result};

/// Loads the checklist catalog from a JSON file.
///
/// The file holds an array of sections in display order. An empty array is
/// a valid catalog (zero items, zero progress); an absent file is a hard
/// error because the catalog provider is a required collaborator.
///
/// Catalogs where two distinct item texts normalize to the same id are
/// rejected here: the id is the key into persisted flag state, and a
/// collision would silently share checkbox state between items.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(PersistenceError::CatalogMissing {
            path: path.to_path_buf(),
        });
    }

    let catalog: Catalog = read_json(path)?;
    validate_unique_ids(&catalog)?;
    Ok(catalog)
}

fn validate_unique_ids(catalog: &Catalog) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for item in catalog.iter_items() {
        let id = item.id();
        if let Some(first) = seen.insert(id.as_str().to_string(), &item.point) {
            return Err(PersistenceError::DuplicateItem {
                id: id.as_str().to_string(),
                first: first.to_string(),
                second: item.point.clone(),
            });
        }
    }

    Ok(())
}
