//! Poll repository
//!
//! Tallies on the stored poll are derived; only the integrity layer writes
//! them, and the patch type carries no tally fields.

use tracing::instrument;

use community_core::entities::{GroupPoll, GroupPollPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `GroupPoll` rows
#[derive(Clone)]
pub struct PollRepository {
    adapter: SharedAdapter,
}

impl PollRepository {
    /// Create a new PollRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupPoll>> {
        self.adapter.read_collection(keys::GROUP_POLLS)
    }

    fn store(&self, rows: &[GroupPoll]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_POLLS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupPoll>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<GroupPoll>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupPoll>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|p| p.group_id == group_id)
            .collect())
    }

    #[instrument(skip(self, poll))]
    pub fn add(&self, poll: GroupPoll) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(poll);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: GroupPollPatch) -> DomainResult<GroupPoll> {
        let mut rows = self.load()?;
        let poll = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::PollNotFound(id.to_string()))?;
        poll.apply(patch);
        let updated = poll.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(DomainError::PollNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
