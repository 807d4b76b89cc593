//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Member not found in group")]
    MemberNotFound,

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Poll not found: {0}")]
    PollNotFound(String),

    #[error("Poll option not found: {0}")]
    OptionNotFound(String),

    #[error("Vote not found for this poll and user")]
    VoteNotFound,

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("RSVP not found for this event and user")]
    RsvpNotFound,

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Warning not found: {0}")]
    WarningNotFound(String),

    #[error("No active ban for this group and user")]
    BanNotFound,

    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    #[error("Message not found: {0}")]
    MessageNotFound(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already a member of this group")]
    AlreadyMember,

    #[error("User already holds an active ban in this group")]
    AlreadyBanned,

    #[error("Slug already in use: {0}")]
    DuplicateSlug(String),

    #[error("Username already in use: {0}")]
    DuplicateUsername(String),

    // =========================================================================
    // Forbidden Errors
    // =========================================================================
    #[error("Actor is not the author of this resource")]
    NotAuthor,

    // =========================================================================
    // Invalid State Errors
    // =========================================================================
    #[error("Poll is closed")]
    PollClosed,

    #[error("User is banned from this group")]
    UserBanned,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PetNotFound(_) => "UNKNOWN_PET",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::TopicNotFound(_) => "UNKNOWN_TOPIC",
            Self::PollNotFound(_) => "UNKNOWN_POLL",
            Self::OptionNotFound(_) => "UNKNOWN_POLL_OPTION",
            Self::VoteNotFound => "UNKNOWN_VOTE",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::RsvpNotFound => "UNKNOWN_RSVP",
            Self::ResourceNotFound(_) => "UNKNOWN_RESOURCE",
            Self::WarningNotFound(_) => "UNKNOWN_WARNING",
            Self::BanNotFound => "UNKNOWN_BAN",
            Self::ConversationNotFound(_) => "UNKNOWN_CONVERSATION",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::AlreadyBanned => "ALREADY_BANNED",
            Self::DuplicateSlug(_) => "DUPLICATE_SLUG",
            Self::DuplicateUsername(_) => "DUPLICATE_USERNAME",

            // Forbidden
            Self::NotAuthor => "NOT_AUTHOR",

            // Invalid State
            Self::PollClosed => "POLL_CLOSED",
            Self::UserBanned => "USER_BANNED",

            // Infrastructure
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PetNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::GroupNotFound(_)
                | Self::MemberNotFound
                | Self::TopicNotFound(_)
                | Self::PollNotFound(_)
                | Self::OptionNotFound(_)
                | Self::VoteNotFound
                | Self::EventNotFound(_)
                | Self::RsvpNotFound
                | Self::ResourceNotFound(_)
                | Self::WarningNotFound(_)
                | Self::BanNotFound
                | Self::ConversationNotFound(_)
                | Self::MessageNotFound(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyMember
                | Self::AlreadyBanned
                | Self::DuplicateSlug(_)
                | Self::DuplicateUsername(_)
        )
    }

    /// Check if this is a forbidden error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::NotAuthor)
    }

    /// Check if this is an invalid-state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::PollClosed | Self::UserBanned)
    }
}
