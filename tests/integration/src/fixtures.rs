//! Test fixtures and data generators
//!
//! Provides reusable test data with unique suffixes.

use std::sync::atomic::{AtomicU64, Ordering};

use community_core::{Group, GroupType, User};
use community_service::dto::CreateGroupRequest;
use community_service::{GroupService, ServiceResult, StoreContext};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Register a user with a unique username
pub fn seed_user(ctx: &StoreContext) -> ServiceResult<User> {
    let suffix = unique_suffix();
    let user = User::new(format!("u{suffix}"), format!("testuser{suffix}"));
    ctx.users().add(user.clone())?;
    Ok(user)
}

/// A create-group request with a unique slug
pub fn group_request(owner_id: &str) -> CreateGroupRequest {
    let suffix = unique_suffix();
    CreateGroupRequest {
        slug: format!("group-{suffix}"),
        name: format!("Group {suffix}"),
        description: Some("fixture group".to_string()),
        category_id: "general".to_string(),
        group_type: GroupType::Open,
        tags: vec![],
        owner_id: owner_id.to_string(),
    }
}

/// Create a group owned by `owner_id` through the group service
pub fn seed_group(ctx: &StoreContext, owner_id: &str) -> ServiceResult<Group> {
    GroupService::new(ctx).create_group(group_request(owner_id))
}
