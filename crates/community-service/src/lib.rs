//! # community-service
//!
//! Application layer: the `StoreContext` dependency container and the
//! business workflows over the repositories — permission predicates,
//! membership, moderation, poll voting, event RSVPs, conversation
//! archive/search, and group/post content flows.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use services::{
    ContentService, ConversationService, EventService, GroupService, InvalidationHook,
    MembershipService, ModerationService, PermissionService, PollService, ServiceError,
    ServiceResult, StoreContext,
};
