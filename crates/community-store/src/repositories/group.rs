//! Group repository

use tracing::instrument;

use community_core::entities::{Group, GroupPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::keys;
use crate::SharedAdapter;

/// Repository for `Group` rows
///
/// Deleting a group removes the group row only: dependent rows (members,
/// topics, polls, …) are not cascade-deleted.
#[derive(Clone)]
pub struct GroupRepository {
    adapter: SharedAdapter,
}

impl GroupRepository {
    /// Create a new GroupRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<Group>> {
        self.adapter.read_collection(keys::GROUPS)
    }

    fn store(&self, rows: &[Group]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUPS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<Group>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<Group>> {
        Ok(self.load()?.into_iter().find(|g| g.id == id))
    }

    /// Lookup by slug, case-sensitive exact match
    #[instrument(skip(self))]
    pub fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Group>> {
        Ok(self.load()?.into_iter().find(|g| g.slug == slug))
    }

    #[instrument(skip(self))]
    pub fn list_by_category(&self, category_id: &str) -> DomainResult<Vec<Group>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|g| g.category_id == category_id)
            .collect())
    }

    #[instrument(skip(self, group))]
    pub fn add(&self, group: Group) -> DomainResult<()> {
        let mut rows = self.load()?;
        if rows.iter().any(|g| g.slug == group.slug) {
            return Err(DomainError::DuplicateSlug(group.slug));
        }
        rows.push(group);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: GroupPatch) -> DomainResult<Group> {
        let mut rows = self.load()?;
        let group = rows
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::GroupNotFound(id.to_string()))?;
        group.apply(patch);
        let updated = group.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|g| g.id != id);
        if rows.len() == before {
            return Err(DomainError::GroupNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
