//! Test helpers
//!
//! Builds a fully wired store context over a fresh in-memory adapter.

use std::sync::Arc;

use community_common::try_init_tracing;
use community_service::StoreContext;
use community_store::MemoryAdapter;

/// Create a store context over a fresh in-memory adapter
///
/// Tracing is initialized once per process so `RUST_LOG` works in tests.
pub fn test_context() -> StoreContext {
    let _ = try_init_tracing();
    StoreContext::new(Arc::new(MemoryAdapter::new()))
}
