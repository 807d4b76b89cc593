//! Direct message entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Delivery status of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Sent,
    Delivered,
    Read,
}

/// File attached to a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAttachment {
    pub url: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Message inside a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<MessageAttachment>,
    /// Per-participant read timestamps; `None` marks delivered-but-unread
    #[serde(default)]
    pub read_at: HashMap<String, Option<DateTime<Utc>>>,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

impl DirectMessage {
    pub fn new(
        id: impl Into<String>,
        conversation_id: impl Into<String>,
        sender_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            sender_id: sender_id.into(),
            content: content.into(),
            attachments: Vec::new(),
            read_at: HashMap::new(),
            status: MessageStatus::Sent,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match against the message content
    pub fn content_matches(&self, query: &str) -> bool {
        self.content.to_lowercase().contains(&query.to_lowercase())
    }

    /// Stamp a reader's read receipt and promote the status
    pub fn mark_read_by(&mut self, user_id: &str, at: DateTime<Utc>) {
        self.read_at.insert(user_id.to_string(), Some(at));
        self.status = MessageStatus::Read;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_match_is_case_insensitive() {
        let message = DirectMessage::new("m1", "c1", "u1", "See you at the Dog Park!");
        assert!(message.content_matches("dog park"));
        assert!(message.content_matches("DOG"));
        assert!(!message.content_matches("cat"));
    }

    #[test]
    fn test_mark_read_by() {
        let mut message = DirectMessage::new("m1", "c1", "u1", "hi");
        assert_eq!(message.status, MessageStatus::Sent);

        message.mark_read_by("u2", Utc::now());
        assert_eq!(message.status, MessageStatus::Read);
        assert!(message.read_at.get("u2").copied().flatten().is_some());
    }
}
