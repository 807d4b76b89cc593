//! Membership service
//!
//! Join/leave workflows over the member repository. Joining verifies the
//! group exists, rejects banned users, and rejects duplicate membership;
//! the member-count bookkeeping happens in the repository layer.

use tracing::{info, instrument};

use community_core::entities::GroupMemberPatch;
use community_core::{DomainError, GroupActivity, GroupMember, GroupRole};

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    /// Join a group as a regular member
    #[instrument(skip(self))]
    pub fn join_group(&self, group_id: &str, user_id: &str) -> ServiceResult<GroupMember> {
        self.ctx
            .groups()
            .find(group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", group_id))?;

        if self.ctx.bans().is_banned(group_id, user_id)? {
            return Err(DomainError::UserBanned.into());
        }

        let member = GroupMember::new(self.ctx.generate_id(), group_id, user_id, GroupRole::Member);
        // Duplicate membership surfaces as AlreadyMember from the repository
        self.ctx.members().add(member.clone())?;

        self.ctx.activities().record(
            GroupActivity::new(self.ctx.generate_id(), group_id, "member_joined")
                .with_actor(user_id),
        )?;

        info!(group_id, user_id, "member joined group");
        Ok(member)
    }

    /// Leave a group
    #[instrument(skip(self))]
    pub fn leave_group(&self, group_id: &str, user_id: &str) -> ServiceResult<()> {
        self.ctx.members().remove(group_id, user_id)?;

        self.ctx.activities().record(
            GroupActivity::new(self.ctx.generate_id(), group_id, "member_left")
                .with_actor(user_id),
        )?;

        info!(group_id, user_id, "member left group");
        Ok(())
    }

    /// Update a member's role or permission overrides
    #[instrument(skip(self, patch))]
    pub fn update_member(
        &self,
        group_id: &str,
        user_id: &str,
        patch: GroupMemberPatch,
    ) -> ServiceResult<GroupMember> {
        let updated = self.ctx.members().update(group_id, user_id, patch)?;
        info!(group_id, user_id, role = %updated.role, "member updated");
        Ok(updated)
    }

    /// Fetch a member row
    #[instrument(skip(self))]
    pub fn get_member(&self, group_id: &str, user_id: &str) -> ServiceResult<GroupMember> {
        self.ctx
            .members()
            .find(group_id, user_id)?
            .ok_or_else(|| ServiceError::not_found("Member", format!("{group_id}/{user_id}")))
    }
}
