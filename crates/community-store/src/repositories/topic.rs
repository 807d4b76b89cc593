//! Topic repository
//!
//! Creation and deletion keep `Group.topic_count` in step.

use tracing::instrument;

use community_core::entities::{GroupTopic, GroupTopicPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{integrity, keys, SharedAdapter};

/// Repository for `GroupTopic` rows
#[derive(Clone)]
pub struct TopicRepository {
    adapter: SharedAdapter,
}

impl TopicRepository {
    /// Create a new TopicRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupTopic>> {
        self.adapter.read_collection(keys::GROUP_TOPICS)
    }

    fn store(&self, rows: &[GroupTopic]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_TOPICS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupTopic>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<GroupTopic>> {
        Ok(self.load()?.into_iter().find(|t| t.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupTopic>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|t| t.group_id == group_id)
            .collect())
    }

    /// Replies nested under a root topic (one level of threading)
    #[instrument(skip(self))]
    pub fn replies_of(&self, parent_topic_id: &str) -> DomainResult<Vec<GroupTopic>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|t| t.parent_topic_id.as_deref() == Some(parent_topic_id))
            .collect())
    }

    #[instrument(skip(self, topic))]
    pub fn add(&self, topic: GroupTopic) -> DomainResult<()> {
        let group_id = topic.group_id.clone();
        let mut rows = self.load()?;
        rows.push(topic);
        self.store(&rows)?;
        integrity::bump_topic_count(self.adapter.as_ref(), &group_id, true)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: GroupTopicPatch) -> DomainResult<GroupTopic> {
        let mut rows = self.load()?;
        let topic = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::TopicNotFound(id.to_string()))?;
        topic.apply(patch);
        let updated = topic.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let Some(index) = rows.iter().position(|t| t.id == id) else {
            return Err(DomainError::TopicNotFound(id.to_string()));
        };
        let removed = rows.remove(index);
        self.store(&rows)?;
        integrity::bump_topic_count(self.adapter.as_ref(), &removed.group_id, false)
    }
}
