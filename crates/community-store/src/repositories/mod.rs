//! Typed repositories - one per entity kind, each a thin view over the
//! storage adapter
//!
//! `add`/`remove` on membership and topics hook into counter maintenance;
//! vote and RSVP changes trigger a full tally recompute (see `integrity`).

mod activity;
mod ban;
mod comment;
mod conversation;
mod event;
mod group;
mod member;
mod message;
mod moderation_action;
mod pet;
mod poll;
mod poll_vote;
mod post;
mod resource;
mod rsvp;
mod topic;
mod user;
mod warning;

pub use activity::ActivityRepository;
pub use ban::BanRepository;
pub use comment::CommentRepository;
pub use conversation::ConversationRepository;
pub use event::EventRepository;
pub use group::GroupRepository;
pub use member::MemberRepository;
pub use message::MessageRepository;
pub use moderation_action::ModerationActionRepository;
pub use pet::PetRepository;
pub use poll::PollRepository;
pub use poll_vote::PollVoteRepository;
pub use post::PostRepository;
pub use resource::ResourceRepository;
pub use rsvp::RsvpRepository;
pub use topic::TopicRepository;
pub use user::UserRepository;
pub use warning::WarningRepository;
