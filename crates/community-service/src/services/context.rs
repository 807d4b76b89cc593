//! Store context - dependency container for services
//!
//! Holds every repository over one shared storage adapter, the id
//! generator, and the optional cache-invalidation hook. The adapter is an
//! explicit constructor argument, so tests inject an in-memory adapter
//! instead of reaching through module-level state.

use std::sync::Arc;

use community_core::IdGenerator;
use community_store::{
    ActivityRepository, BanRepository, CommentRepository, ConversationRepository,
    EventRepository, GroupRepository, MemberRepository, MessageRepository,
    ModerationActionRepository, PetRepository, PollRepository, PollVoteRepository,
    PostRepository, ResourceRepository, RsvpRepository, SharedAdapter, TopicRepository,
    UserRepository, WarningRepository,
};

/// Zero-argument notification fired after group/post mutations, consumed
/// by an external caching layer
pub type InvalidationHook = Arc<dyn Fn() + Send + Sync>;

/// Service context containing all dependencies
///
/// The store assumes a single logical writer: each multi-step operation
/// (ban + unmember, vote replace + recompute, member add + counter bump)
/// completes fully before the next begins. A concurrent port must scope a
/// lock or transaction to the affected group, poll, or event.
#[derive(Clone)]
pub struct StoreContext {
    adapter: SharedAdapter,

    // Repositories
    users: UserRepository,
    pets: PetRepository,
    posts: PostRepository,
    comments: CommentRepository,
    groups: GroupRepository,
    members: MemberRepository,
    topics: TopicRepository,
    polls: PollRepository,
    poll_votes: PollVoteRepository,
    events: EventRepository,
    rsvps: RsvpRepository,
    resources: ResourceRepository,
    activities: ActivityRepository,
    warnings: WarningRepository,
    bans: BanRepository,
    moderation_actions: ModerationActionRepository,
    conversations: ConversationRepository,
    messages: MessageRepository,

    // Services
    id_generator: IdGenerator,
    invalidation_hook: Option<InvalidationHook>,
}

impl StoreContext {
    /// Create a context with every repository bound to `adapter`
    pub fn new(adapter: SharedAdapter) -> Self {
        Self {
            users: UserRepository::new(adapter.clone()),
            pets: PetRepository::new(adapter.clone()),
            posts: PostRepository::new(adapter.clone()),
            comments: CommentRepository::new(adapter.clone()),
            groups: GroupRepository::new(adapter.clone()),
            members: MemberRepository::new(adapter.clone()),
            topics: TopicRepository::new(adapter.clone()),
            polls: PollRepository::new(adapter.clone()),
            poll_votes: PollVoteRepository::new(adapter.clone()),
            events: EventRepository::new(adapter.clone()),
            rsvps: RsvpRepository::new(adapter.clone()),
            resources: ResourceRepository::new(adapter.clone()),
            activities: ActivityRepository::new(adapter.clone()),
            warnings: WarningRepository::new(adapter.clone()),
            bans: BanRepository::new(adapter.clone()),
            moderation_actions: ModerationActionRepository::new(adapter.clone()),
            conversations: ConversationRepository::new(adapter.clone()),
            messages: MessageRepository::new(adapter.clone()),
            adapter,
            id_generator: IdGenerator::new(),
            invalidation_hook: None,
        }
    }

    /// Attach a cache-invalidation hook fired after group/post mutations
    #[must_use]
    pub fn with_invalidation_hook(mut self, hook: InvalidationHook) -> Self {
        self.invalidation_hook = Some(hook);
        self
    }

    /// Get the shared storage adapter
    pub fn adapter(&self) -> &SharedAdapter {
        &self.adapter
    }

    // === Repositories ===

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn pets(&self) -> &PetRepository {
        &self.pets
    }

    pub fn posts(&self) -> &PostRepository {
        &self.posts
    }

    pub fn comments(&self) -> &CommentRepository {
        &self.comments
    }

    pub fn groups(&self) -> &GroupRepository {
        &self.groups
    }

    pub fn members(&self) -> &MemberRepository {
        &self.members
    }

    pub fn topics(&self) -> &TopicRepository {
        &self.topics
    }

    pub fn polls(&self) -> &PollRepository {
        &self.polls
    }

    pub fn poll_votes(&self) -> &PollVoteRepository {
        &self.poll_votes
    }

    pub fn events(&self) -> &EventRepository {
        &self.events
    }

    pub fn rsvps(&self) -> &RsvpRepository {
        &self.rsvps
    }

    pub fn resources(&self) -> &ResourceRepository {
        &self.resources
    }

    pub fn activities(&self) -> &ActivityRepository {
        &self.activities
    }

    pub fn warnings(&self) -> &WarningRepository {
        &self.warnings
    }

    pub fn bans(&self) -> &BanRepository {
        &self.bans
    }

    pub fn moderation_actions(&self) -> &ModerationActionRepository {
        &self.moderation_actions
    }

    pub fn conversations(&self) -> &ConversationRepository {
        &self.conversations
    }

    pub fn messages(&self) -> &MessageRepository {
        &self.messages
    }

    // === Services ===

    /// Generate a new opaque id
    pub fn generate_id(&self) -> String {
        self.id_generator.generate()
    }

    /// Fire the cache-invalidation hook; a missing hook is a no-op and a
    /// write never fails on account of notification
    pub fn notify_invalidation(&self) {
        if let Some(hook) = &self.invalidation_hook {
            hook();
        }
    }
}

impl std::fmt::Debug for StoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreContext")
            .field("adapter", &"SharedAdapter")
            .field("repositories", &"...")
            .field(
                "invalidation_hook",
                &self.invalidation_hook.as_ref().map(|_| "Fn()"),
            )
            .finish()
    }
}
