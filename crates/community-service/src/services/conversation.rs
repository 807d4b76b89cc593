//! Conversation service
//!
//! Archive partitioning, message search, and direct-message flows.
//! Archiving partitions the *listing* only: messages inside archived
//! conversations remain searchable.

use chrono::Utc;
use tracing::{info, instrument};

use community_core::{Conversation, ConversationType, DirectMessage, MessageAttachment};

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

/// Conversation service
pub struct ConversationService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> ConversationService<'a> {
    /// Create a new ConversationService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    /// Conversations the user participates in, partitioned by archive
    /// state and sorted by `updated_at` descending
    #[instrument(skip(self))]
    pub fn conversations_for_user(
        &self,
        user_id: &str,
        archived_only: bool,
    ) -> ServiceResult<Vec<Conversation>> {
        let mut rows: Vec<Conversation> = self
            .ctx
            .conversations()
            .for_participant(user_id)?
            .into_iter()
            .filter(|c| c.is_archived == archived_only)
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }

    /// Flip the archive flag, returning the updated record
    #[instrument(skip(self))]
    pub fn set_archive_state(
        &self,
        conversation_id: &str,
        archived: bool,
    ) -> ServiceResult<Conversation> {
        let updated = self.ctx.conversations().set_archived(conversation_id, archived)?;
        info!(conversation_id, archived, "conversation archive state changed");
        Ok(updated)
    }

    /// Case-insensitive substring search across all of the user's
    /// conversations, archived or not; matches carry their conversation id
    #[instrument(skip(self))]
    pub fn search_messages_for_user(
        &self,
        user_id: &str,
        query: &str,
    ) -> ServiceResult<Vec<DirectMessage>> {
        let conversation_ids: Vec<String> = self
            .ctx
            .conversations()
            .for_participant(user_id)?
            .into_iter()
            .map(|c| c.id)
            .collect();

        Ok(self.ctx.messages().search_in(&conversation_ids, query)?)
    }

    /// The direct conversation between two users, created on first use
    #[instrument(skip(self))]
    pub fn open_direct(&self, user_id: &str, recipient_id: &str) -> ServiceResult<Conversation> {
        if user_id == recipient_id {
            return Err(ServiceError::validation("cannot open a conversation with yourself"));
        }

        if let Some(existing) = self
            .ctx
            .conversations()
            .find_direct_between(user_id, recipient_id)?
        {
            return Ok(existing);
        }

        let conversation = Conversation::new(
            self.ctx.generate_id(),
            vec![user_id.to_string(), recipient_id.to_string()],
            ConversationType::Direct,
        );
        self.ctx.conversations().add(conversation.clone())?;

        info!(conversation_id = %conversation.id, user_id, recipient_id, "direct conversation created");
        Ok(conversation)
    }

    /// Append a message, bumping the other participants' unread counts and
    /// the conversation's recency
    #[instrument(skip(self, content, attachments))]
    pub fn send_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
        attachments: Vec<MessageAttachment>,
    ) -> ServiceResult<DirectMessage> {
        let mut conversation = self
            .ctx
            .conversations()
            .find(conversation_id)?
            .ok_or_else(|| ServiceError::not_found("Conversation", conversation_id))?;

        if !conversation.has_participant(sender_id) {
            return Err(ServiceError::validation("sender is not a participant"));
        }

        let mut message =
            DirectMessage::new(self.ctx.generate_id(), conversation_id, sender_id, content);
        message.attachments = attachments;
        self.ctx.messages().add(message.clone())?;

        conversation.record_message(&message.id, sender_id);
        self.ctx.conversations().save(&conversation)?;

        info!(conversation_id, sender_id, message_id = %message.id, "message sent");
        Ok(message)
    }

    /// Clear the reader's unread count and stamp read receipts on
    /// messages from other participants
    #[instrument(skip(self))]
    pub fn mark_read(&self, conversation_id: &str, user_id: &str) -> ServiceResult<()> {
        let mut conversation = self
            .ctx
            .conversations()
            .find(conversation_id)?
            .ok_or_else(|| ServiceError::not_found("Conversation", conversation_id))?;

        let now = Utc::now();
        for mut message in self.ctx.messages().list_by_conversation(conversation_id)? {
            if message.sender_id != user_id && message.read_at.get(user_id).copied().flatten().is_none() {
                message.mark_read_by(user_id, now);
                self.ctx.messages().save(&message)?;
            }
        }

        conversation.clear_unread(user_id);
        self.ctx.conversations().save(&conversation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use community_store::MemoryAdapter;
    use std::sync::Arc;

    fn ctx() -> StoreContext {
        StoreContext::new(Arc::new(MemoryAdapter::new()))
    }

    #[test]
    fn test_open_direct_is_idempotent() {
        let ctx = ctx();
        let service = ConversationService::new(&ctx);

        let first = service.open_direct("u1", "u2").unwrap();
        let second = service.open_direct("u2", "u1").unwrap();
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_open_direct_with_self_rejected() {
        let ctx = ctx();
        let err = ConversationService::new(&ctx)
            .open_direct("u1", "u1")
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_archive_partition() {
        let ctx = ctx();
        let service = ConversationService::new(&ctx);
        let kept = service.open_direct("u1", "u2").unwrap();
        let archived = service.open_direct("u1", "u3").unwrap();
        service.set_archive_state(&archived.id, true).unwrap();

        let active = service.conversations_for_user("u1", false).unwrap();
        let shelved = service.conversations_for_user("u1", true).unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, kept.id);
        assert_eq!(shelved.len(), 1);
        assert_eq!(shelved[0].id, archived.id);
    }

    #[test]
    fn test_search_ignores_archive_state() {
        let ctx = ctx();
        let service = ConversationService::new(&ctx);
        let convo = service.open_direct("u1", "u2").unwrap();
        service
            .send_message(&convo.id, "u1", "meet at the dog park", vec![])
            .unwrap();
        service.set_archive_state(&convo.id, true).unwrap();

        let hits = service.search_messages_for_user("u1", "Dog Park").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].conversation_id, convo.id);

        // A non-participant finds nothing
        assert!(service
            .search_messages_for_user("u9", "dog park")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_send_updates_unread_and_mark_read_clears() {
        let ctx = ctx();
        let service = ConversationService::new(&ctx);
        let convo = service.open_direct("u1", "u2").unwrap();
        service.send_message(&convo.id, "u1", "hello", vec![]).unwrap();

        let fresh = ctx.conversations().find(&convo.id).unwrap().unwrap();
        assert_eq!(fresh.unread_counts.get("u2"), Some(&1));

        service.mark_read(&convo.id, "u2").unwrap();
        let fresh = ctx.conversations().find(&convo.id).unwrap().unwrap();
        assert_eq!(fresh.unread_counts.get("u2"), None);

        let messages = ctx.messages().list_by_conversation(&convo.id).unwrap();
        assert!(messages[0].read_at.get("u2").copied().flatten().is_some());
    }

    #[test]
    fn test_non_participant_cannot_send() {
        let ctx = ctx();
        let service = ConversationService::new(&ctx);
        let convo = service.open_direct("u1", "u2").unwrap();

        let err = service
            .send_message(&convo.id, "u9", "intruding", vec![])
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
