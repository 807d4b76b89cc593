//! Activity entity - a group's append-only activity feed entry
//!
//! Capped at 1000 entries per group, oldest evicted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group activity feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupActivity {
    pub id: String,
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    /// Short activity kind, e.g. "member_joined", "topic_created"
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl GroupActivity {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            actor_id: None,
            kind: kind.into(),
            detail: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
