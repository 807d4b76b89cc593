//! Storage adapter trait (port) - define the interface for persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The surface is a JSON-level key/value
//! store: one key per entity collection, no entity-aware logic. Adapter
//! errors propagate unchanged to the caller; the store performs no retries.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Minimal read/write/remove surface over named keys
pub trait StorageAdapter: Send + Sync {
    /// Read the raw value stored under `key`, or `None` when absent
    fn read(&self, key: &str) -> DomainResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: Value) -> DomainResult<()>;

    /// Remove the value stored under `key`; removing an absent key is a no-op
    fn remove(&self, key: &str) -> DomainResult<()>;
}

/// Typed collection access over any storage adapter
pub trait StorageAdapterExt {
    /// Read a typed collection; a missing key reads as the empty collection
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Vec<T>>;

    /// Write a typed collection under `key`
    fn write_collection<T: Serialize>(&self, key: &str, rows: &[T]) -> DomainResult<()>;
}

impl<A: StorageAdapter + ?Sized> StorageAdapterExt for A {
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Vec<T>> {
        match self.read(key)? {
            Some(value) => {
                serde_json::from_value(value).map_err(|e| DomainError::Serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, rows: &[T]) -> DomainResult<()> {
        let value =
            serde_json::to_value(rows).map_err(|e| DomainError::Serialization(e.to_string()))?;
        self.write(key, value)
    }
}
