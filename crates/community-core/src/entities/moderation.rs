//! Moderation entities - warnings, bans, and the audit trail
//!
//! Warnings are append-only and never deleted. A ban is *active* iff
//! `is_active` is set and the expiry, when present, lies in the future;
//! expiry is computed lazily at query time and never materialized back
//! into the row. Moderation actions form a bounded, append-only audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Severity of a warning, set by the issuing moderator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Minor,
    Moderate,
    Severe,
}

/// Warning issued to a user within a group, append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWarning {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub level: WarningLevel,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub issued_by: String,
    pub created_at: DateTime<Utc>,
}

impl GroupWarning {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        user_id: impl Into<String>,
        level: WarningLevel,
        reason: impl Into<String>,
        issued_by: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            user_id: user_id.into(),
            level,
            reason: reason.into(),
            notes: None,
            issued_by: issued_by.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ban of a user from a group
///
/// Revoking a ban flips `is_active` to false; the row is kept for history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBan {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub reason: String,
    pub banned_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl GroupBan {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        user_id: impl Into<String>,
        reason: impl Into<String>,
        banned_by: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            user_id: user_id.into(),
            reason: reason.into(),
            banned_by: banned_by.into(),
            expires_at,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Active iff not revoked and not expired as of `now`
    #[inline]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.is_none_or(|expires| expires > now)
    }
}

/// Kind of moderation action recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationActionType {
    Warn,
    Ban,
    Unban,
    Kick,
}

/// Audit log entry, capped at 1000 entries per group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationAction {
    pub id: String,
    pub group_id: String,
    pub action_type: ModerationActionType,
    pub target_id: String,
    pub target_type: String,
    pub performed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
    pub timestamp: DateTime<Utc>,
}

impl ModerationAction {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        action_type: ModerationActionType,
        target_id: impl Into<String>,
        target_type: impl Into<String>,
        performed_by: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            action_type,
            target_id: target_id.into(),
            target_type: target_type.into(),
            performed_by: performed_by.into(),
            reason: None,
            metadata: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_ban_is_active() {
        let ban = GroupBan::new("b1", "g1", "u1", "spam", "mod1", None);
        assert!(ban.is_active_at(Utc::now()));
    }

    #[test]
    fn test_revoked_ban_is_inactive() {
        let mut ban = GroupBan::new("b1", "g1", "u1", "spam", "mod1", None);
        ban.is_active = false;
        assert!(!ban.is_active_at(Utc::now()));
    }

    #[test]
    fn test_ban_expiry_is_lazy() {
        let now = Utc::now();
        let ban = GroupBan::new("b1", "g1", "u1", "spam", "mod1", Some(now + Duration::days(7)));
        assert!(ban.is_active_at(now));
        assert!(!ban.is_active_at(now + Duration::days(8)));
        // The row itself is untouched by expiry
        assert!(ban.is_active);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let ban = GroupBan::new("b1", "g1", "u1", "spam", "mod1", Some(now));
        assert!(!ban.is_active_at(now));
    }

    #[test]
    fn test_action_with_reason() {
        let action = ModerationAction::new("a1", "g1", ModerationActionType::Warn, "u1", "user", "mod1")
            .with_reason("be kind");
        assert_eq!(action.reason.as_deref(), Some("be kind"));
        assert_eq!(action.action_type, ModerationActionType::Warn);
    }

    #[test]
    fn test_action_type_serde() {
        let json = serde_json::to_string(&ModerationActionType::Unban).unwrap();
        assert_eq!(json, "\"unban\"");
    }
}
