//! Permission service
//!
//! Advisory capability predicates over the current membership row. Callers
//! consult these before invoking a mutation; the store itself does not gate
//! group-content mutations on them. Moderation and management capabilities
//! come from the role alone; posting capabilities honor the per-member
//! explicit-false overrides. An absent member answers `false` to
//! everything.

use tracing::{debug, instrument};

use community_core::{GroupMember, GroupType};

use super::context::StoreContext;
use super::error::ServiceResult;

/// Permission service for capability queries
pub struct PermissionService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    fn member(&self, group_id: &str, user_id: &str) -> ServiceResult<Option<GroupMember>> {
        Ok(self.ctx.members().find(group_id, user_id)?)
    }

    /// Can warn, ban, and kick: owner, admin, or moderator
    #[instrument(skip(self))]
    pub fn can_moderate(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self
            .member(group_id, user_id)?
            .is_some_and(|m| m.role.can_moderate()))
    }

    /// Can add/remove members and change roles: owner or admin
    #[instrument(skip(self))]
    pub fn can_manage_members(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self
            .member(group_id, user_id)?
            .is_some_and(|m| m.role.can_manage_members()))
    }

    /// Can edit group settings: owner or admin
    #[instrument(skip(self))]
    pub fn can_manage_settings(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self
            .member(group_id, user_id)?
            .is_some_and(|m| m.role.can_manage_settings()))
    }

    /// Can post, unless the member's override is explicitly false
    #[instrument(skip(self))]
    pub fn can_post(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self
            .member(group_id, user_id)?
            .is_some_and(|m| m.permissions.allows_post()))
    }

    /// Can comment, unless the member's override is explicitly false
    #[instrument(skip(self))]
    pub fn can_comment(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self
            .member(group_id, user_id)?
            .is_some_and(|m| m.permissions.allows_comment()))
    }

    /// Can create topics, unless the member's override is explicitly false
    #[instrument(skip(self))]
    pub fn can_create_topic(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self
            .member(group_id, user_id)?
            .is_some_and(|m| m.permissions.allows_create_topic()))
    }

    /// Group visibility check
    ///
    /// False when the group does not exist or the user holds an active
    /// ban. Open and closed groups are visible to anyone, including
    /// anonymous callers; secret groups only to members.
    #[instrument(skip(self))]
    pub fn can_view_group(&self, group_id: &str, user_id: Option<&str>) -> ServiceResult<bool> {
        let Some(group) = self.ctx.groups().find(group_id)? else {
            return Ok(false);
        };

        if let Some(user_id) = user_id {
            if self.ctx.bans().is_banned(group_id, user_id)? {
                debug!(group_id, user_id, "view denied: active ban");
                return Ok(false);
            }
        }

        match group.group_type {
            GroupType::Open | GroupType::Closed => Ok(true),
            GroupType::Secret => match user_id {
                Some(user_id) => Ok(self.ctx.members().is_member(group_id, user_id)?),
                None => Ok(false),
            },
        }
    }
}
