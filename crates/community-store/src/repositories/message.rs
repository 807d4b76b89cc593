//! Direct message repository

use tracing::instrument;

use community_core::entities::DirectMessage;
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `DirectMessage` rows
#[derive(Clone)]
pub struct MessageRepository {
    adapter: SharedAdapter,
}

impl MessageRepository {
    /// Create a new MessageRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<DirectMessage>> {
        self.adapter.read_collection(keys::DIRECT_MESSAGES)
    }

    fn store(&self, rows: &[DirectMessage]) -> DomainResult<()> {
        self.adapter.write_collection(keys::DIRECT_MESSAGES, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<DirectMessage>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<DirectMessage>> {
        Ok(self.load()?.into_iter().find(|m| m.id == id))
    }

    /// Messages in a conversation, oldest first
    #[instrument(skip(self))]
    pub fn list_by_conversation(&self, conversation_id: &str) -> DomainResult<Vec<DirectMessage>> {
        let mut rows: Vec<DirectMessage> = self
            .load()?
            .into_iter()
            .filter(|m| m.conversation_id == conversation_id)
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    /// Case-insensitive content search across the given conversations
    ///
    /// Archive state of the conversations is irrelevant here: it partitions
    /// listing, not searchability.
    #[instrument(skip(self, conversation_ids))]
    pub fn search_in(
        &self,
        conversation_ids: &[String],
        query: &str,
    ) -> DomainResult<Vec<DirectMessage>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|m| {
                conversation_ids.iter().any(|id| *id == m.conversation_id)
                    && m.content_matches(query)
            })
            .collect())
    }

    #[instrument(skip(self, message))]
    pub fn add(&self, message: DirectMessage) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(message);
        self.store(&rows)
    }

    /// Write back a message mutated in place (read receipts, status)
    #[instrument(skip(self, message))]
    pub fn save(&self, message: &DirectMessage) -> DomainResult<()> {
        let mut rows = self.load()?;
        let slot = rows
            .iter_mut()
            .find(|m| m.id == message.id)
            .ok_or_else(|| DomainError::MessageNotFound(message.id.clone()))?;
        *slot = message.clone();
        self.store(&rows)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(DomainError::MessageNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
