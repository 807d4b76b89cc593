//! Configuration structs

mod store_config;

pub use store_config::{AdapterBackend, ConfigError, StorageConfig, StoreConfig};
