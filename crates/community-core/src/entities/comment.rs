//! Comment entity - a reply on a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity; edit/delete is gated on authorship in the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        post_id: impl Into<String>,
        author_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            post_id: post_id.into(),
            author_id: author_id.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: CommentPatch) {
        if let Some(body) = patch.body {
            self.body = body;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a Comment
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub body: Option<String>,
}
