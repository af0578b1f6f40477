//! Key-value persistence medium.
//!
//! The store persists each collection as a JSON string under a fixed key.
//! [`StorageMedium`] is the seam between the store and whatever durable
//! medium backs it: an in-memory map for tests, a JSON file on disk for
//! real deployments.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Storage keys, one per persisted collection plus the session flag.
pub mod keys {
    pub const SERVICES: &str = "services";
    pub const VIDEO_ITEMS: &str = "videoItems";
    pub const GRAPHIC_ITEMS: &str = "graphicItems";
    pub const CLIENTS: &str = "clients";
    pub const AUTH_FLAG: &str = "authFlag";

    /// Every key the store owns, in reset order.
    pub const ALL: [&str; 5] = [SERVICES, VIDEO_ITEMS, GRAPHIC_ITEMS, CLIENTS, AUTH_FLAG];
}

/// The trait that all persistence backends implement.
///
/// Values are opaque strings; the store layers JSON on top. `get` is
/// infallible (absent and unreadable look the same to the caller), while
/// writes surface medium faults.
pub trait StorageMedium {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory medium. Not durable; the default for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: BTreeMap<String, String>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Durable medium: a single JSON object file mapping keys to string values.
///
/// The whole map is rewritten on every `set`/`remove` (write-through, no
/// batching). A file that exists but does not parse is treated as empty,
/// matching the load-or-fall-back contract of the collections stored in it.
#[derive(Debug)]
pub struct JsonFileMedium {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileMedium {
    /// Open the medium at `path`, loading any existing entries.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("ignoring unparsable storage file {:?}: {}", path, err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StorageMedium for JsonFileMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_set_get_remove() {
        let mut medium = MemoryMedium::new();
        assert_eq!(medium.get("k"), None);

        medium.set("k", "v").unwrap();
        assert_eq!(medium.get("k"), Some("v".to_string()));

        medium.set("k", "v2").unwrap();
        assert_eq!(medium.get("k"), Some("v2".to_string()));

        medium.remove("k").unwrap();
        assert_eq!(medium.get("k"), None);
        // Removing an absent key is a no-op.
        medium.remove("k").unwrap();
    }

    #[test]
    fn file_medium_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let mut medium = JsonFileMedium::open(&path).unwrap();
        medium.set("services", "[1,2,3]").unwrap();
        medium.set("authFlag", "true").unwrap();
        drop(medium);

        let medium = JsonFileMedium::open(&path).unwrap();
        assert_eq!(medium.get("services"), Some("[1,2,3]".to_string()));
        assert_eq!(medium.get("authFlag"), Some("true".to_string()));
    }

    #[test]
    fn file_medium_treats_corrupt_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "not json at all").unwrap();

        let medium = JsonFileMedium::open(&path).unwrap();
        assert_eq!(medium.get("services"), None);
    }

    #[test]
    fn file_medium_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let mut medium = JsonFileMedium::open(&path).unwrap();
        medium.set("clients", "[]").unwrap();
        medium.remove("clients").unwrap();
        drop(medium);

        let medium = JsonFileMedium::open(&path).unwrap();
        assert_eq!(medium.get("clients"), None);
    }
}
