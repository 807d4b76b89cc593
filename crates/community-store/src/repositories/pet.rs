//! Pet repository

use tracing::instrument;

use community_core::entities::{Pet, PetPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `Pet` rows; `slug` is unique per owner
#[derive(Clone)]
pub struct PetRepository {
    adapter: SharedAdapter,
}

impl PetRepository {
    /// Create a new PetRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<Pet>> {
        self.adapter.read_collection(keys::PETS)
    }

    fn store(&self, rows: &[Pet]) -> DomainResult<()> {
        self.adapter.write_collection(keys::PETS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<Pet>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<Pet>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<Pet>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|p| p.owner_id == owner_id)
            .collect())
    }

    /// Lookup by owner and slug, case-sensitive exact match
    #[instrument(skip(self))]
    pub fn find_by_owner_and_slug(&self, owner_id: &str, slug: &str) -> DomainResult<Option<Pet>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|p| p.owner_id == owner_id && p.slug == slug))
    }

    #[instrument(skip(self, pet))]
    pub fn add(&self, pet: Pet) -> DomainResult<()> {
        let mut rows = self.load()?;
        if rows
            .iter()
            .any(|p| p.owner_id == pet.owner_id && p.slug == pet.slug)
        {
            return Err(DomainError::DuplicateSlug(pet.slug));
        }
        rows.push(pet);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: PetPatch) -> DomainResult<Pet> {
        let mut rows = self.load()?;
        let pet = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::PetNotFound(id.to_string()))?;
        pet.apply(patch);
        let updated = pet.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(DomainError::PetNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
