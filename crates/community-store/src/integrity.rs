//! Referential-integrity and counter maintenance
//!
//! Membership and topic counts only ever add or remove whole rows, so they
//! are incremented/decremented in place (floored at zero). Poll tallies and
//! event attendee counts can be *replaced* by a new vote/RSVP from the same
//! user, so they are always recomputed from the full row set — an increment
//! model would double count.
//!
//! Counter updates for a group that no longer exists are silent no-ops:
//! deleting a group does not cascade, so dependent rows may outlive it.

use community_core::entities::{EventRsvp, Group, GroupEvent, GroupPoll, PollVote};
use community_core::error::DomainResult;
use community_core::{StorageAdapter, StorageAdapterExt};

use crate::keys;

/// Per-group cap for the bounded logs (moderation actions, activities)
pub const LOG_CAP_PER_GROUP: usize = 1000;

fn with_group<F>(adapter: &dyn StorageAdapter, group_id: &str, f: F) -> DomainResult<()>
where
    F: FnOnce(&mut Group),
{
    let mut groups: Vec<Group> = adapter.read_collection(keys::GROUPS)?;
    let Some(group) = groups.iter_mut().find(|g| g.id == group_id) else {
        return Ok(());
    };
    f(group);
    adapter.write_collection(keys::GROUPS, &groups)
}

/// Adjust `Group.member_count` after a member row was added or removed
pub fn bump_member_count(
    adapter: &dyn StorageAdapter,
    group_id: &str,
    added: bool,
) -> DomainResult<()> {
    with_group(adapter, group_id, |group| {
        group.member_count = if added {
            group.member_count + 1
        } else {
            // floored at zero: double-remove must never go negative
            group.member_count.saturating_sub(1)
        };
    })
}

/// Adjust `Group.topic_count` after a topic row was added or removed
pub fn bump_topic_count(
    adapter: &dyn StorageAdapter,
    group_id: &str,
    added: bool,
) -> DomainResult<()> {
    with_group(adapter, group_id, |group| {
        group.topic_count = if added {
            group.topic_count + 1
        } else {
            group.topic_count.saturating_sub(1)
        };
    })
}

/// Rebuild the poll-level and per-option tallies from the vote rows
pub fn recompute_poll_tallies(adapter: &dyn StorageAdapter, poll_id: &str) -> DomainResult<()> {
    let votes: Vec<PollVote> = adapter.read_collection(keys::POLL_VOTES)?;
    let poll_votes: Vec<&PollVote> = votes.iter().filter(|v| v.poll_id == poll_id).collect();

    let mut polls: Vec<GroupPoll> = adapter.read_collection(keys::GROUP_POLLS)?;
    let Some(poll) = polls.iter_mut().find(|p| p.id == poll_id) else {
        return Ok(());
    };

    poll.vote_count = poll_votes.len() as u32;
    for option in &mut poll.options {
        option.vote_count = poll_votes.iter().filter(|v| v.selects(&option.id)).count() as u32;
    }

    adapter.write_collection(keys::GROUP_POLLS, &polls)
}

/// Rebuild `GroupEvent.attendee_count` from the RSVP rows with status `going`
pub fn recompute_attendee_count(adapter: &dyn StorageAdapter, event_id: &str) -> DomainResult<()> {
    let rsvps: Vec<EventRsvp> = adapter.read_collection(keys::EVENT_RSVPS)?;
    let going = rsvps
        .iter()
        .filter(|r| r.event_id == event_id && r.is_going())
        .count() as u32;

    let mut events: Vec<GroupEvent> = adapter.read_collection(keys::GROUP_EVENTS)?;
    let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
        return Ok(());
    };

    event.attendee_count = going;
    adapter.write_collection(keys::GROUP_EVENTS, &events)
}

/// Entry of a per-group bounded log
pub trait GroupLogEntry {
    fn group_id(&self) -> &str;
    fn id(&self) -> &str;
}

impl GroupLogEntry for community_core::ModerationAction {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl GroupLogEntry for community_core::GroupActivity {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Drop entries beyond the per-group cap from a newest-first log
///
/// `rows` must be ordered newest-first. Eviction compares ids, never object
/// identity, and leaves other groups' entries untouched. Returns the number
/// of evicted entries.
pub fn evict_log_overflow<T: GroupLogEntry>(rows: &mut Vec<T>, group_id: &str) -> usize {
    let overflow_ids: Vec<String> = rows
        .iter()
        .filter(|row| row.group_id() == group_id)
        .skip(LOG_CAP_PER_GROUP)
        .map(|row| row.id().to_string())
        .collect();

    if overflow_ids.is_empty() {
        return 0;
    }

    rows.retain(|row| row.group_id() != group_id || !overflow_ids.iter().any(|id| id == row.id()));
    overflow_ids.len()
}
