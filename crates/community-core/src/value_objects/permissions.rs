//! Per-member permission overrides
//!
//! Each flag is tri-state: unset (`None`) and `Some(true)` grant the
//! capability, `Some(false)` revokes it. Only an explicit `false` takes a
//! capability away, so a freshly joined member with no overrides can post,
//! comment, and create topics.

use serde::{Deserialize, Serialize};

/// Per-member boolean permission overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_comment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_topic: Option<bool>,
}

impl MemberPermissions {
    /// All capabilities granted (no overrides set)
    pub const fn unrestricted() -> Self {
        Self {
            can_post: None,
            can_comment: None,
            can_create_topic: None,
        }
    }

    #[inline]
    pub fn allows_post(&self) -> bool {
        self.can_post != Some(false)
    }

    #[inline]
    pub fn allows_comment(&self) -> bool {
        self.can_comment != Some(false)
    }

    #[inline]
    pub fn allows_create_topic(&self) -> bool {
        self.can_create_topic != Some(false)
    }
}
