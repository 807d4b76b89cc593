//! Group entity - a community space holding members, topics, polls, and events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visibility type of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Visible and joinable by anyone
    #[default]
    Open,
    /// Visible to anyone, membership is gated
    Closed,
    /// Visible only to members
    Secret,
}

/// Group entity
///
/// `member_count` and `topic_count` are derived counters maintained by the
/// integrity layer; they must always equal the live count of member/topic
/// rows referencing this group and are never patched directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    pub member_count: u32,
    pub topic_count: u32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new Group with zeroed counters
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        group_type: GroupType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            category_id: category_id.into(),
            group_type,
            member_count: 0,
            topic_count: 0,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Visible only to members
    #[inline]
    pub fn is_secret(&self) -> bool {
        self.group_type == GroupType::Secret
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: GroupPatch) {
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(group_type) = patch.group_type {
            self.group_type = group_type;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a Group
///
/// Derived counters are deliberately absent: a caller cannot overwrite
/// `member_count` or `topic_count` through `update`.
#[derive(Debug, Clone, Default)]
pub struct GroupPatch {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub group_type: Option<GroupType>,
    pub tags: Option<Vec<String>>,
}
