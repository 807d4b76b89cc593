//! Post entity - user-authored feed content
//!
//! Editing or deleting a post is gated on authorship inside the repository:
//! a mismatched actor id is rejected, not silently accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        author_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            author_id: author_id.into(),
            pet_id: None,
            body: body.into(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a Post
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorship() {
        let post = Post::new("p1", "u1", "hello");
        assert!(post.is_authored_by("u1"));
        assert!(!post.is_authored_by("u2"));
    }
}
