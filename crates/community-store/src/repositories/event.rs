//! Event repository

use tracing::instrument;

use community_core::entities::{GroupEvent, GroupEventPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `GroupEvent` rows; `attendee_count` is derived
#[derive(Clone)]
pub struct EventRepository {
    adapter: SharedAdapter,
}

impl EventRepository {
    /// Create a new EventRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupEvent>> {
        self.adapter.read_collection(keys::GROUP_EVENTS)
    }

    fn store(&self, rows: &[GroupEvent]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_EVENTS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupEvent>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<GroupEvent>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupEvent>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.group_id == group_id)
            .collect())
    }

    #[instrument(skip(self, event))]
    pub fn add(&self, event: GroupEvent) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(event);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: GroupEventPatch) -> DomainResult<GroupEvent> {
        let mut rows = self.load()?;
        let event = rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::EventNotFound(id.to_string()))?;
        event.apply(patch);
        let updated = event.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(DomainError::EventNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
