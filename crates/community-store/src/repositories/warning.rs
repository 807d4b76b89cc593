//! Warning repository
//!
//! Warnings are append-only and never deleted; the per-user warning count
//! is simply the number of rows for that `(group, user)` pair.

use tracing::instrument;

use community_core::entities::GroupWarning;
use community_core::error::DomainResult;
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `GroupWarning` rows
#[derive(Clone)]
pub struct WarningRepository {
    adapter: SharedAdapter,
}

impl WarningRepository {
    /// Create a new WarningRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupWarning>> {
        self.adapter.read_collection(keys::GROUP_WARNINGS)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupWarning>> {
        self.load()
    }

    #[instrument(skip(self, warning))]
    pub fn add(&self, warning: GroupWarning) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(warning);
        self.adapter.write_collection(keys::GROUP_WARNINGS, &rows)
    }

    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupWarning>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|w| w.group_id == group_id)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn list_for_user(&self, group_id: &str, user_id: &str) -> DomainResult<Vec<GroupWarning>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|w| w.group_id == group_id && w.user_id == user_id)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn count_for_user(&self, group_id: &str, user_id: &str) -> DomainResult<usize> {
        Ok(self.list_for_user(group_id, user_id)?.len())
    }
}
