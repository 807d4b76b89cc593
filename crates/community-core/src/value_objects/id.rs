//! Id generation
//!
//! Entity ids are opaque strings, unique within their entity kind. Callers
//! may bring their own ids; the service layer uses this generator when they
//! don't.

use uuid::Uuid;

/// Generator for opaque string ids (UUID v4)
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new unique id
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
