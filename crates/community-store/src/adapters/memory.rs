//! In-memory storage adapter
//!
//! Default backend for tests; state lives for the process lifetime only.

use dashmap::DashMap;
use serde_json::Value;

use community_core::error::DomainResult;
use community_core::StorageAdapter;

/// In-memory implementation of the storage adapter
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    entries: DashMap<String, Value>,
}

impl MemoryAdapter {
    /// Create a new empty MemoryAdapter
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageAdapter for MemoryAdapter {
    fn read(&self, key: &str) -> DomainResult<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn write(&self, key: &str, value: Value) -> DomainResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
