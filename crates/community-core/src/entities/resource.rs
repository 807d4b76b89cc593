//! Resource entity - a link or document shared in a group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group resource entity; carries no derived aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResource {
    pub id: String,
    pub group_id: String,
    pub author_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroupResource {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        author_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            group_id: group_id.into(),
            author_id: author_id.into(),
            title: title.into(),
            url: None,
            body: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: GroupResourcePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a GroupResource
#[derive(Debug, Clone, Default)]
pub struct GroupResourcePatch {
    pub title: Option<String>,
    pub url: Option<Option<String>>,
    pub body: Option<Option<String>>,
}
