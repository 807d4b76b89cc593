//! Storage adapter port - the swappable persistence surface

mod adapter;

pub use adapter::{StorageAdapter, StorageAdapterExt};
