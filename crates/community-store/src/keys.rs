//! Collection key names
//!
//! One key per entity kind, each holding that kind's full ordered list.

pub const USERS: &str = "users";
pub const PETS: &str = "pets";
pub const POSTS: &str = "posts";
pub const COMMENTS: &str = "comments";
pub const GROUPS: &str = "groups";
pub const GROUP_MEMBERS: &str = "group_members";
pub const GROUP_TOPICS: &str = "group_topics";
pub const GROUP_POLLS: &str = "group_polls";
pub const POLL_VOTES: &str = "poll_votes";
pub const GROUP_EVENTS: &str = "group_events";
pub const EVENT_RSVPS: &str = "event_rsvps";
pub const GROUP_RESOURCES: &str = "group_resources";
pub const GROUP_ACTIVITIES: &str = "group_activities";
pub const GROUP_WARNINGS: &str = "group_warnings";
pub const GROUP_BANS: &str = "group_bans";
pub const MODERATION_ACTIONS: &str = "moderation_actions";
pub const CONVERSATIONS: &str = "conversations";
pub const DIRECT_MESSAGES: &str = "direct_messages";
