//! Member entity - represents a user's membership in a group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GroupRole, MemberPermissions};

/// Group member entity (junction between User and Group)
///
/// Unique per `(group_id, user_id)`. Created on join, removed on
/// leave/kick/ban.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub role: GroupRole,
    #[serde(default)]
    pub permissions: MemberPermissions,
    pub joined_at: DateTime<Utc>,
}

impl GroupMember {
    /// Create a new GroupMember with the given role and no overrides
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        user_id: impl Into<String>,
        role: GroupRole,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            user_id: user_id.into(),
            role,
            permissions: MemberPermissions::unrestricted(),
            joined_at: Utc::now(),
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: GroupMemberPatch) {
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(permissions) = patch.permissions {
            self.permissions = permissions;
        }
    }
}

/// Partial update for a GroupMember
#[derive(Debug, Clone, Default)]
pub struct GroupMemberPatch {
    pub role: Option<GroupRole>,
    pub permissions: Option<MemberPermissions>,
}
