//! JSON-file storage adapter
//!
//! Persists each collection key as one pretty-printed JSON file under a
//! data directory. Writes go through a mutex so concurrent callers cannot
//! interleave partial file contents; multi-key operations still rely on
//! the store's single-writer contract.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapter;

/// File-backed implementation of the storage adapter
pub struct JsonFileAdapter {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileAdapter {
    /// Create an adapter rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl AsRef<Path>) -> DomainResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageAdapter for JsonFileAdapter {
    fn read(&self, key: &str) -> DomainResult<Option<Value>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| DomainError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: Value) -> DomainResult<()> {
        let bytes = serde_json::to_vec_pretty(&value)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        let _guard = self.write_lock.lock();
        fs::write(self.path_for(key), bytes).map_err(|e| DomainError::Storage(e.to_string()))?;
        debug!(key, "collection written");
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        let _guard = self.write_lock.lock();
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Storage(e.to_string())),
        }
    }
}
