//! Data transfer objects for store inputs
//!
//! Request DTOs implement `Deserialize` and `Validate` so callers can hand
//! over raw UI input and get field-level validation errors back.

pub mod requests;

// Re-export commonly used request types
pub use requests::{
    is_valid_slug, CreateCommentRequest, CreateEventRequest, CreateGroupRequest,
    CreatePollRequest, CreatePostRequest, CreateResourceRequest, CreateTopicRequest,
};
