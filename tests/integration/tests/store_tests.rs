//! Store integration tests
//!
//! End-to-end coverage of the assembled store over the in-memory adapter:
//! counter consistency, ban workflow, vote-replace semantics, archive
//! partitioning, search, and the bounded audit log.
//!
//! Run with: cargo test -p integration-tests --test store_tests

use anyhow::Result;
use chrono::{Duration, Utc};

use community_core::{
    Conversation, ConversationType, GroupBan, ModerationAction, ModerationActionType, RsvpStatus,
    WarningLevel,
};
use community_service::dto::{CreateEventRequest, CreatePollRequest};
use community_service::{
    ConversationService, EventService, MembershipService, ModerationService, PermissionService,
    PollService,
};
use integration_tests::{seed_group, seed_user, test_context, unique_suffix};

// ============================================================================
// Counter Consistency
// ============================================================================

#[test]
fn test_member_count_tracks_live_rows() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    let membership = MembershipService::new(&ctx);

    let users: Vec<_> = (0..5).map(|_| seed_user(&ctx).unwrap()).collect();
    for user in &users {
        membership.join_group(&group.id, &user.id)?;
    }
    membership.leave_group(&group.id, &users[0].id)?;
    membership.leave_group(&group.id, &users[3].id)?;

    let stored = ctx.groups().find(&group.id)?.unwrap();
    let live = ctx.members().list_by_group(&group.id)?.len();
    assert_eq!(stored.member_count as usize, live);
    assert_eq!(live, 4); // owner + 5 joined - 2 left

    Ok(())
}

#[test]
fn test_remove_member_scenario() -> Result<()> {
    // Owner A and member B, memberCount=2; removing B leaves 1 and B unresolvable
    let ctx = test_context();
    let a = seed_user(&ctx)?;
    let b = seed_user(&ctx)?;
    let group = seed_group(&ctx, &a.id)?;
    let membership = MembershipService::new(&ctx);

    membership.join_group(&group.id, &b.id)?;
    assert_eq!(ctx.groups().find(&group.id)?.unwrap().member_count, 2);

    membership.leave_group(&group.id, &b.id)?;
    assert_eq!(ctx.groups().find(&group.id)?.unwrap().member_count, 1);
    assert!(ctx.members().find(&group.id, &b.id)?.is_none());
    assert!(membership.get_member(&group.id, &b.id).is_err());

    Ok(())
}

// ============================================================================
// Moderation
// ============================================================================

#[test]
fn test_single_active_ban_per_pair() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let target = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    MembershipService::new(&ctx).join_group(&group.id, &target.id)?;

    let moderation = ModerationService::new(&ctx);
    moderation.issue_ban(&group.id, &target.id, "spam", &owner.id, None)?;

    // A second active ban is rejected, not stacked
    assert!(moderation
        .issue_ban(&group.id, &target.id, "again", &owner.id, None)
        .unwrap_err()
        .is_conflict());

    let active: Vec<GroupBan> = ctx
        .bans()
        .list_by_group(&group.id)?
        .into_iter()
        .filter(|b| b.is_active_at(Utc::now()))
        .collect();
    assert_eq!(active.len(), 1);

    Ok(())
}

#[test]
fn test_ban_lifecycle_and_membership() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let target = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    let membership = MembershipService::new(&ctx);
    let moderation = ModerationService::new(&ctx);

    membership.join_group(&group.id, &target.id)?;
    moderation.issue_ban(&group.id, &target.id, "spam", &owner.id, None)?;

    // Banned user holds no member row and cannot rejoin
    assert!(ctx.members().find(&group.id, &target.id)?.is_none());
    assert!(membership.join_group(&group.id, &target.id).is_err());

    // Unban frees the pair but does not restore membership
    moderation.revoke_ban(&group.id, &target.id, &owner.id)?;
    assert!(ctx.members().find(&group.id, &target.id)?.is_none());
    membership.join_group(&group.id, &target.id)?;

    Ok(())
}

#[test]
fn test_expired_ban_admits_user() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let target = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;

    ModerationService::new(&ctx).issue_ban(
        &group.id,
        &target.id,
        "cooldown",
        &owner.id,
        Some(Utc::now() - Duration::minutes(1)),
    )?;

    // Expiry is evaluated lazily; the row still says is_active
    let rows = ctx.bans().list_by_group(&group.id)?;
    assert!(rows[0].is_active);
    assert!(!ModerationService::new(&ctx).is_banned(&group.id, &target.id)?);

    MembershipService::new(&ctx).join_group(&group.id, &target.id)?;
    Ok(())
}

#[test]
fn test_warnings_accumulate_and_audit() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let target = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    let moderation = ModerationService::new(&ctx);

    for level in [WarningLevel::Minor, WarningLevel::Moderate, WarningLevel::Severe] {
        moderation.issue_warning(&group.id, &target.id, level, "conduct", None, &owner.id)?;
    }

    assert_eq!(moderation.warning_count(&group.id, &target.id)?, 3);

    let warns = moderation
        .audit_log(&group.id)?
        .into_iter()
        .filter(|a| a.action_type == ModerationActionType::Warn)
        .count();
    assert_eq!(warns, 3);
    Ok(())
}

// ============================================================================
// Bounded Audit Log
// ============================================================================

#[test]
fn test_audit_log_bound_per_group() -> Result<()> {
    let ctx = test_context();
    let repo = ctx.moderation_actions();

    repo.record(ModerationAction::new(
        "keepsake",
        "other-group",
        ModerationActionType::Warn,
        "u1",
        "user",
        "mod1",
    ))?;

    for i in 0..1001 {
        repo.record(ModerationAction::new(
            format!("act-{i}"),
            "busy-group",
            ModerationActionType::Warn,
            "u1",
            "user",
            "mod1",
        ))?;
    }

    // Exactly 1000 remain for the busy group; the other group is untouched
    assert_eq!(repo.count_by_group("busy-group")?, 1000);
    assert_eq!(repo.count_by_group("other-group")?, 1);

    // The newest entry survives, the very first was evicted
    let log = repo.list_by_group("busy-group")?;
    assert_eq!(log[0].id, "act-1000");
    assert!(!log.iter().any(|a| a.id == "act-0"));

    Ok(())
}

// ============================================================================
// Poll Voting
// ============================================================================

#[test]
fn test_vote_swap_equals_fresh_vote() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    let polls = PollService::new(&ctx);

    let request = |suffix: u64| CreatePollRequest {
        group_id: group.id.clone(),
        topic_id: None,
        question: format!("q{suffix}"),
        options: vec!["x".to_string(), "y".to_string()],
        closes_at: None,
    };

    // Poll 1: vote x, then swap to y
    let swapped = polls.create_poll(request(unique_suffix()))?;
    polls.cast_vote(&swapped.id, &owner.id, vec![swapped.options[0].id.clone()])?;
    let swapped = polls.cast_vote(&swapped.id, &owner.id, vec![swapped.options[1].id.clone()])?;

    // Poll 2: only ever vote y
    let fresh = polls.create_poll(request(unique_suffix()))?;
    let fresh = polls.cast_vote(&fresh.id, &owner.id, vec![fresh.options[1].id.clone()])?;

    assert_eq!(swapped.vote_count, fresh.vote_count);
    assert_eq!(swapped.vote_count, 1);
    for (a, b) in swapped.options.iter().zip(fresh.options.iter()) {
        assert_eq!(a.vote_count, b.vote_count);
    }

    Ok(())
}

#[test]
fn test_poll_scenario_revote() -> Result<()> {
    // Poll with [x, y]: U votes [x] -> (1, 0); revotes [y] -> (0, 1), total stays 1
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    let polls = PollService::new(&ctx);

    let poll = polls.create_poll(CreatePollRequest {
        group_id: group.id.clone(),
        topic_id: None,
        question: "Snack?".to_string(),
        options: vec!["x".to_string(), "y".to_string()],
        closes_at: None,
    })?;

    let after = polls.cast_vote(&poll.id, &owner.id, vec![poll.options[0].id.clone()])?;
    assert_eq!(after.options[0].vote_count, 1);
    assert_eq!(after.options[1].vote_count, 0);

    let after = polls.cast_vote(&poll.id, &owner.id, vec![poll.options[1].id.clone()])?;
    assert_eq!(after.options[0].vote_count, 0);
    assert_eq!(after.options[1].vote_count, 1);
    assert_eq!(after.vote_count, 1);

    Ok(())
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_attendee_count_follows_rsvps() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let group = seed_group(&ctx, &owner.id)?;
    let events = EventService::new(&ctx);

    let event = events.create_event(CreateEventRequest {
        group_id: group.id.clone(),
        title: "Picnic".to_string(),
        description: None,
        location: None,
        start_date: Utc::now() + Duration::days(3),
        end_date: None,
    })?;

    let u1 = seed_user(&ctx)?;
    let u2 = seed_user(&ctx)?;
    events.rsvp(&event.id, &u1.id, RsvpStatus::Going)?;
    events.rsvp(&event.id, &u2.id, RsvpStatus::Going)?;
    let after = events.rsvp(&event.id, &u2.id, RsvpStatus::NotGoing)?;
    assert_eq!(after.attendee_count, 1);

    let after = events.cancel_rsvp(&event.id, &u1.id)?;
    assert_eq!(after.attendee_count, 0);
    Ok(())
}

// ============================================================================
// Conversations
// ============================================================================

#[test]
fn test_archive_partition_is_exact() -> Result<()> {
    let ctx = test_context();
    let conversations = ConversationService::new(&ctx);

    let me = "me";
    let c1 = conversations.open_direct(me, "pal-a")?;
    let c2 = conversations.open_direct(me, "pal-b")?;
    let c3 = conversations.open_direct(me, "pal-c")?;
    conversations.set_archive_state(&c2.id, true)?;

    let active = conversations.conversations_for_user(me, false)?;
    let archived = conversations.conversations_for_user(me, true)?;

    // active ∪ archived covers everything, active ∩ archived is empty
    let mut all: Vec<String> = active.iter().chain(archived.iter()).map(|c| c.id.clone()).collect();
    all.sort();
    let mut expected = vec![c1.id.clone(), c2.id.clone(), c3.id.clone()];
    expected.sort();
    assert_eq!(all, expected);
    assert!(active.iter().all(|c| archived.iter().all(|a| a.id != c.id)));

    // Unarchiving restores the original partition
    conversations.set_archive_state(&c2.id, false)?;
    assert_eq!(conversations.conversations_for_user(me, false)?.len(), 3);
    assert!(conversations.conversations_for_user(me, true)?.is_empty());

    Ok(())
}

#[test]
fn test_conversations_sorted_by_recency() -> Result<()> {
    // c2 with updatedAt T2 > T1 lists before c1
    let ctx = test_context();
    let t1 = Utc::now() - Duration::hours(2);
    let t2 = Utc::now() - Duration::hours(1);

    let mut c1 = Conversation::new("c1", vec!["u".into(), "a".into()], ConversationType::Direct);
    c1.updated_at = t1;
    let mut c2 = Conversation::new("c2", vec!["u".into(), "b".into()], ConversationType::Direct);
    c2.updated_at = t2;
    ctx.conversations().add(c1)?;
    ctx.conversations().add(c2)?;

    let listed = ConversationService::new(&ctx).conversations_for_user("u", false)?;
    let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c1"]);
    Ok(())
}

#[test]
fn test_search_spans_archived_conversations() -> Result<()> {
    let ctx = test_context();
    let conversations = ConversationService::new(&ctx);

    let convo = conversations.open_direct("me", "friend")?;
    conversations.send_message(&convo.id, "me", "Let's meet at the fountain", vec![])?;
    conversations.send_message(&convo.id, "friend", "fountain works, see you", vec![])?;
    conversations.set_archive_state(&convo.id, true)?;

    // Archived conversations disappear from the active listing...
    assert!(conversations.conversations_for_user("me", false)?.is_empty());

    // ...but their messages still match, case-insensitively
    let hits = conversations.search_messages_for_user("me", "FOUNTAIN")?;
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|m| m.conversation_id == convo.id));

    Ok(())
}

// ============================================================================
// Permissions
// ============================================================================

#[test]
fn test_visibility_rules_end_to_end() -> Result<()> {
    let ctx = test_context();
    let owner = seed_user(&ctx)?;
    let outsider = seed_user(&ctx)?;

    let mut request = integration_tests::group_request(&owner.id);
    request.group_type = community_core::GroupType::Secret;
    let secret = community_service::GroupService::new(&ctx).create_group(request)?;

    let perms = PermissionService::new(&ctx);
    assert!(perms.can_view_group(&secret.id, Some(&owner.id))?);
    assert!(!perms.can_view_group(&secret.id, Some(&outsider.id))?);
    assert!(!perms.can_view_group(&secret.id, None)?);

    // Banning the owner from their own group removes visibility too
    ModerationService::new(&ctx).issue_ban(&secret.id, &owner.id, "coup", &outsider.id, None)?;
    assert!(!perms.can_view_group(&secret.id, Some(&owner.id))?);

    Ok(())
}
