//! Atomic JSON file operations.
//!
//! Writes go to a temp file in the target directory first and are renamed
//! into place, so a crash never leaves a half-written store behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};

/// Serializes a value and writes it to `path` atomically.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| PersistenceError::DirectoryError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // Temp file in the same directory so the rename stays on one filesystem.
    let dir = path.parent().unwrap_or(Path::new("."));
    let write_err = |source| PersistenceError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(json.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    temp.persist(path).map_err(|e| PersistenceError::WriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Reads and deserializes JSON from a file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| PersistenceError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Reads JSON from a file, returning `None` when the file doesn't exist.
pub fn read_json_optional<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    read_json(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::tempdir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payload.json");

        let payload = Payload {
            name: "flags".to_string(),
            count: 3,
        };

        write_json(&path, &payload).unwrap();
        let loaded: Payload = read_json(&path).unwrap();

        assert_eq!(loaded, payload);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/payload.json");

        write_json(&path, &42u32).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payload.json");

        write_json(&path, &1u32).unwrap();
        write_json(&path, &2u32).unwrap();

        let loaded: u32 = read_json(&path).unwrap();
        assert_eq!(loaded, 2);
    }

    #[test]
    fn test_read_optional_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let loaded: Option<Payload> = read_json_optional(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_read_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let result: Result<Payload> = read_json(&path);
        assert!(matches!(result, Err(PersistenceError::SerializeError(_))));
    }
}
