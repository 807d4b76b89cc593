//! Resource repository

use tracing::instrument;

use community_core::entities::{GroupResource, GroupResourcePatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `GroupResource` rows; no derived aggregates
#[derive(Clone)]
pub struct ResourceRepository {
    adapter: SharedAdapter,
}

impl ResourceRepository {
    /// Create a new ResourceRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupResource>> {
        self.adapter.read_collection(keys::GROUP_RESOURCES)
    }

    fn store(&self, rows: &[GroupResource]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_RESOURCES, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupResource>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<GroupResource>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupResource>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.group_id == group_id)
            .collect())
    }

    #[instrument(skip(self, resource))]
    pub fn add(&self, resource: GroupResource) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(resource);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: GroupResourcePatch) -> DomainResult<GroupResource> {
        let mut rows = self.load()?;
        let resource = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::ResourceNotFound(id.to_string()))?;
        resource.apply(patch);
        let updated = resource.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(DomainError::ResourceNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
