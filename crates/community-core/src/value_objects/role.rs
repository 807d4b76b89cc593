//! Group role - the rank a member holds inside a group
//!
//! Roles form a fixed hierarchy: owner > admin > moderator > member.
//! Moderation and management capabilities come from the role alone;
//! per-member permission overrides never grant or revoke them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a member inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Owner,
    Admin,
    Moderator,
    #[default]
    Member,
}

impl GroupRole {
    /// Can warn, ban, and kick other members
    #[inline]
    pub fn can_moderate(self) -> bool {
        matches!(self, Self::Owner | Self::Admin | Self::Moderator)
    }

    /// Can add and remove members, change member roles
    #[inline]
    pub fn can_manage_members(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// Can edit group settings
    #[inline]
    pub fn can_manage_settings(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Member => "member",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_capability() {
        assert!(GroupRole::Owner.can_moderate());
        assert!(GroupRole::Admin.can_moderate());
        assert!(GroupRole::Moderator.can_moderate());
        assert!(!GroupRole::Member.can_moderate());
    }

    #[test]
    fn test_management_capability() {
        assert!(GroupRole::Owner.can_manage_members());
        assert!(GroupRole::Admin.can_manage_settings());
        assert!(!GroupRole::Moderator.can_manage_members());
        assert!(!GroupRole::Member.can_manage_settings());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&GroupRole::Moderator).unwrap();
        assert_eq!(json, "\"moderator\"");

        let role: GroupRole = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(role, GroupRole::Owner);
    }
}
