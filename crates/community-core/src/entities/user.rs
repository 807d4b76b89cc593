//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            username: username.into(),
            display_name: None,
            email: None,
            avatar: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name if set, otherwise the username
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a User; the username is immutable
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub display_name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub bio: Option<Option<String>>,
}
