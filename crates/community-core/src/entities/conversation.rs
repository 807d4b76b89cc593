//! Conversation entity - a message thread between participants
//!
//! Archive state partitions listing, not searchability: archived
//! conversations disappear from the active list but their messages remain
//! searchable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    #[default]
    Direct,
    Group,
    Support,
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participant_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub conversation_type: ConversationType,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub muted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<String>,
    #[serde(default)]
    pub unread_counts: HashMap<String, u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation between the given participants
    pub fn new(
        id: impl Into<String>,
        participant_ids: Vec<String>,
        conversation_type: ConversationType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            participant_ids,
            title: None,
            tags: Vec::new(),
            conversation_type,
            is_archived: false,
            pinned: false,
            muted: false,
            last_message_id: None,
            unread_counts: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == user_id)
    }

    /// Direct conversation between exactly these two users
    pub fn is_direct_between(&self, user_a: &str, user_b: &str) -> bool {
        self.conversation_type == ConversationType::Direct
            && self.participant_ids.len() == 2
            && self.has_participant(user_a)
            && self.has_participant(user_b)
    }

    /// Record a new message: bump every other participant's unread count
    /// and move the conversation to the top of the listing
    pub fn record_message(&mut self, message_id: &str, sender_id: &str) {
        self.last_message_id = Some(message_id.to_string());
        for participant in &self.participant_ids {
            if participant != sender_id {
                *self.unread_counts.entry(participant.clone()).or_insert(0) += 1;
            }
        }
        self.updated_at = Utc::now();
    }

    /// Clear the reader's unread count
    pub fn clear_unread(&mut self, user_id: &str) {
        self.unread_counts.remove(user_id);
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: ConversationPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
        if let Some(muted) = patch.muted {
            self.muted = muted;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a Conversation; archive state has its own operation
#[derive(Debug, Clone, Default)]
pub struct ConversationPatch {
    pub title: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub pinned: Option<bool>,
    pub muted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(id: &str, a: &str, b: &str) -> Conversation {
        Conversation::new(id, vec![a.to_string(), b.to_string()], ConversationType::Direct)
    }

    #[test]
    fn test_participant_check() {
        let convo = direct("c1", "u1", "u2");
        assert!(convo.has_participant("u1"));
        assert!(!convo.has_participant("u3"));
    }

    #[test]
    fn test_is_direct_between() {
        let convo = direct("c1", "u1", "u2");
        assert!(convo.is_direct_between("u1", "u2"));
        assert!(convo.is_direct_between("u2", "u1"));
        assert!(!convo.is_direct_between("u1", "u3"));
    }

    #[test]
    fn test_record_message_bumps_unread_for_others() {
        let mut convo = direct("c1", "u1", "u2");
        convo.record_message("m1", "u1");
        convo.record_message("m2", "u1");

        assert_eq!(convo.last_message_id.as_deref(), Some("m2"));
        assert_eq!(convo.unread_counts.get("u2"), Some(&2));
        assert_eq!(convo.unread_counts.get("u1"), None);
    }

    #[test]
    fn test_clear_unread() {
        let mut convo = direct("c1", "u1", "u2");
        convo.record_message("m1", "u1");
        convo.clear_unread("u2");
        assert_eq!(convo.unread_counts.get("u2"), None);
    }
}
