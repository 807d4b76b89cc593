//! User repository

use tracing::instrument;

use community_core::entities::{User, UserPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `User` rows
#[derive(Clone)]
pub struct UserRepository {
    adapter: SharedAdapter,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<User>> {
        self.adapter.read_collection(keys::USERS)
    }

    fn store(&self, rows: &[User]) -> DomainResult<()> {
        self.adapter.write_collection(keys::USERS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<User>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.id == id))
    }

    /// Lookup by username, case-sensitive exact match
    #[instrument(skip(self))]
    pub fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.username == username))
    }

    #[instrument(skip(self, user))]
    pub fn add(&self, user: User) -> DomainResult<()> {
        let mut rows = self.load()?;
        if rows.iter().any(|u| u.username == user.username) {
            return Err(DomainError::DuplicateUsername(user.username));
        }
        rows.push(user);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: UserPatch) -> DomainResult<User> {
        let mut rows = self.load()?;
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))?;
        user.apply(patch);
        let updated = user.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(DomainError::UserNotFound(id.to_string()));
        }
        self.store(&rows)
    }
}
