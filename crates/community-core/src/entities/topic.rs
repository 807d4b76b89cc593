//! Topic entity - a discussion thread inside a group
//!
//! One level of threading: a topic with a `parent_topic_id` is a reply to a
//! root topic, never to another reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group topic entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTopic {
    pub id: String,
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_topic_id: Option<String>,
    pub author_id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroupTopic {
    /// Create a new root topic
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        author_id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            group_id: group_id.into(),
            parent_topic_id: None,
            author_id: author_id.into(),
            title: title.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to an existing topic
    pub fn reply(
        id: impl Into<String>,
        group_id: impl Into<String>,
        parent_topic_id: impl Into<String>,
        author_id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let mut topic = Self::new(id, group_id, author_id, title, body);
        topic.parent_topic_id = Some(parent_topic_id.into());
        topic
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_topic_id.is_some()
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: GroupTopicPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a GroupTopic
#[derive(Debug, Clone, Default)]
pub struct GroupTopicPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}
