//! Moderation service
//!
//! Warnings and time-bounded bans per `(group, user)` pair, each writing
//! the bounded audit log. Issuing a ban is one logical unit: append the
//! ban row, append the audit entry, and remove the target's membership
//! (with its counter decrement) if present. Unbanning revokes the most
//! recent active ban and does not restore membership.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use community_core::{
    DomainError, GroupBan, GroupWarning, ModerationAction, ModerationActionType, WarningLevel,
};

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

const TARGET_USER: &str = "user";

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    /// Issue a warning; warnings accumulate and are never deleted
    #[instrument(skip(self, reason, notes))]
    pub fn issue_warning(
        &self,
        group_id: &str,
        user_id: &str,
        level: WarningLevel,
        reason: &str,
        notes: Option<&str>,
        issued_by: &str,
    ) -> ServiceResult<GroupWarning> {
        self.ctx
            .groups()
            .find(group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", group_id))?;

        let mut warning = GroupWarning::new(
            self.ctx.generate_id(),
            group_id,
            user_id,
            level,
            reason,
            issued_by,
        );
        warning.notes = notes.map(String::from);
        self.ctx.warnings().add(warning.clone())?;

        self.ctx.moderation_actions().record(
            ModerationAction::new(
                self.ctx.generate_id(),
                group_id,
                ModerationActionType::Warn,
                user_id,
                TARGET_USER,
                issued_by,
            )
            .with_reason(reason),
        )?;

        info!(group_id, user_id, issued_by, "warning issued");
        Ok(warning)
    }

    /// Number of warnings ever issued to this user in this group
    #[instrument(skip(self))]
    pub fn warning_count(&self, group_id: &str, user_id: &str) -> ServiceResult<usize> {
        Ok(self.ctx.warnings().count_for_user(group_id, user_id)?)
    }

    /// Issue a ban, removing the target's membership as part of the same
    /// logical unit
    ///
    /// A second active ban for the same pair is rejected with a conflict.
    #[instrument(skip(self, reason))]
    pub fn issue_ban(
        &self,
        group_id: &str,
        user_id: &str,
        reason: &str,
        banned_by: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> ServiceResult<GroupBan> {
        self.ctx
            .groups()
            .find(group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", group_id))?;

        let ban = GroupBan::new(
            self.ctx.generate_id(),
            group_id,
            user_id,
            reason,
            banned_by,
            expires_at,
        );
        self.ctx.bans().add(ban.clone())?;

        // A banned user cannot simultaneously hold a membership row
        let was_member = self.ctx.members().remove_if_present(group_id, user_id)?;

        self.ctx.moderation_actions().record(
            ModerationAction::new(
                self.ctx.generate_id(),
                group_id,
                ModerationActionType::Ban,
                user_id,
                TARGET_USER,
                banned_by,
            )
            .with_reason(reason),
        )?;

        info!(group_id, user_id, banned_by, was_member, "ban issued");
        Ok(ban)
    }

    /// Revoke the most recent active ban; membership is not restored
    #[instrument(skip(self))]
    pub fn revoke_ban(
        &self,
        group_id: &str,
        user_id: &str,
        performed_by: &str,
    ) -> ServiceResult<GroupBan> {
        let active = self
            .ctx
            .bans()
            .find_active(group_id, user_id)?
            .ok_or(DomainError::BanNotFound)?;

        let revoked = self.ctx.bans().deactivate(&active.id)?;

        self.ctx.moderation_actions().record(ModerationAction::new(
            self.ctx.generate_id(),
            group_id,
            ModerationActionType::Unban,
            user_id,
            TARGET_USER,
            performed_by,
        ))?;

        info!(group_id, user_id, performed_by, "ban revoked");
        Ok(revoked)
    }

    /// Whether the user holds an active ban right now
    #[instrument(skip(self))]
    pub fn is_banned(&self, group_id: &str, user_id: &str) -> ServiceResult<bool> {
        Ok(self.ctx.bans().is_banned(group_id, user_id)?)
    }

    /// Remove a member without banning them
    #[instrument(skip(self))]
    pub fn kick_member(
        &self,
        group_id: &str,
        user_id: &str,
        performed_by: &str,
    ) -> ServiceResult<()> {
        self.ctx.members().remove(group_id, user_id)?;

        self.ctx.moderation_actions().record(ModerationAction::new(
            self.ctx.generate_id(),
            group_id,
            ModerationActionType::Kick,
            user_id,
            TARGET_USER,
            performed_by,
        ))?;

        info!(group_id, user_id, performed_by, "member kicked");
        Ok(())
    }

    /// Audit entries for a group, newest first
    #[instrument(skip(self))]
    pub fn audit_log(&self, group_id: &str) -> ServiceResult<Vec<ModerationAction>> {
        Ok(self.ctx.moderation_actions().list_by_group(group_id)?)
    }
}
