//! # community-store
//!
//! Infrastructure layer implementing persistence for the community store.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - Storage adapter implementations (in-memory, JSON-file) for the
//!   `StorageAdapter` port defined in `community-core`
//! - One typed repository per entity kind, each a thin view over the
//!   adapter with the persisted layout of one collection key per kind
//! - Referential-integrity and counter maintenance invoked from
//!   repository `add`/`remove`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use community_store::adapters::MemoryAdapter;
//! use community_store::repositories::GroupRepository;
//!
//! let adapter: community_store::SharedAdapter = Arc::new(MemoryAdapter::new());
//! let groups = GroupRepository::new(adapter.clone());
//! ```

pub mod adapters;
pub mod integrity;
pub mod keys;
pub mod repositories;

use std::sync::Arc;

use community_core::StorageAdapter;

/// Shared handle to the storage adapter, cloned into every repository
pub type SharedAdapter = Arc<dyn StorageAdapter>;

// Re-export commonly used types
pub use adapters::{JsonFileAdapter, MemoryAdapter};
pub use repositories::{
    ActivityRepository, BanRepository, CommentRepository, ConversationRepository,
    EventRepository, GroupRepository, MemberRepository, MessageRepository,
    ModerationActionRepository, PetRepository, PollRepository, PollVoteRepository,
    PostRepository, ResourceRepository, RsvpRepository, TopicRepository, UserRepository,
    WarningRepository,
};
