//! Conversation repository

use tracing::instrument;

use community_core::entities::{Conversation, ConversationPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `Conversation` rows
#[derive(Clone)]
pub struct ConversationRepository {
    adapter: SharedAdapter,
}

impl ConversationRepository {
    /// Create a new ConversationRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<Conversation>> {
        self.adapter.read_collection(keys::CONVERSATIONS)
    }

    fn store(&self, rows: &[Conversation]) -> DomainResult<()> {
        self.adapter.write_collection(keys::CONVERSATIONS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<Conversation>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<Conversation>> {
        Ok(self.load()?.into_iter().find(|c| c.id == id))
    }

    /// All conversations the user participates in, regardless of archive state
    #[instrument(skip(self))]
    pub fn for_participant(&self, user_id: &str) -> DomainResult<Vec<Conversation>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|c| c.has_participant(user_id))
            .collect())
    }

    /// The existing direct conversation between two users, if any
    #[instrument(skip(self))]
    pub fn find_direct_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> DomainResult<Option<Conversation>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|c| c.is_direct_between(user_a, user_b)))
    }

    #[instrument(skip(self, conversation))]
    pub fn add(&self, conversation: Conversation) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(conversation);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: ConversationPatch) -> DomainResult<Conversation> {
        let mut rows = self.load()?;
        let conversation = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::ConversationNotFound(id.to_string()))?;
        conversation.apply(patch);
        let updated = conversation.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    /// Write back a conversation mutated in place (unread counts, last message)
    #[instrument(skip(self, conversation))]
    pub fn save(&self, conversation: &Conversation) -> DomainResult<()> {
        let mut rows = self.load()?;
        let slot = rows
            .iter_mut()
            .find(|c| c.id == conversation.id)
            .ok_or_else(|| DomainError::ConversationNotFound(conversation.id.clone()))?;
        *slot = conversation.clone();
        self.store(&rows)
    }

    /// Flip the archive flag, returning the updated record
    #[instrument(skip(self))]
    pub fn set_archived(&self, id: &str, archived: bool) -> DomainResult<Conversation> {
        let mut rows = self.load()?;
        let conversation = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::ConversationNotFound(id.to_string()))?;
        conversation.is_archived = archived;
        let updated = conversation.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::ConversationNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
