//! Activity repository
//!
//! Append-only feed, newest-first, capped at 1000 entries per group.

use tracing::{debug, instrument};

use community_core::entities::GroupActivity;
use community_core::error::DomainResult;
use community_core::StorageAdapterExt;

use crate::{integrity, keys, SharedAdapter};

/// Repository for `GroupActivity` rows
#[derive(Clone)]
pub struct ActivityRepository {
    adapter: SharedAdapter,
}

impl ActivityRepository {
    /// Create a new ActivityRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupActivity>> {
        self.adapter.read_collection(keys::GROUP_ACTIVITIES)
    }

    fn store(&self, rows: &[GroupActivity]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_ACTIVITIES, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupActivity>> {
        self.load()
    }

    /// Append an entry, evicting the group's oldest entries beyond the cap
    #[instrument(skip(self, activity))]
    pub fn record(&self, activity: GroupActivity) -> DomainResult<()> {
        let group_id = activity.group_id.clone();
        let mut rows = self.load()?;
        rows.insert(0, activity);
        let evicted = integrity::evict_log_overflow(&mut rows, &group_id);
        if evicted > 0 {
            debug!(group_id, evicted, "activity feed trimmed");
        }
        self.store(&rows)
    }

    /// Entries for a group, newest first
    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupActivity>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|a| a.group_id == group_id)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn count_by_group(&self, group_id: &str) -> DomainResult<usize> {
        Ok(self.list_by_group(group_id)?.len())
    }
}
