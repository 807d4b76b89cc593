//! Ban repository
//!
//! At most one *active* ban per `(group_id, user_id)`. Activity is
//! evaluated lazily against the expiry at query time; revoking flips
//! `is_active` and keeps the row for history.

use chrono::Utc;
use tracing::instrument;

use community_core::entities::GroupBan;
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `GroupBan` rows
#[derive(Clone)]
pub struct BanRepository {
    adapter: SharedAdapter,
}

impl BanRepository {
    /// Create a new BanRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupBan>> {
        self.adapter.read_collection(keys::GROUP_BANS)
    }

    fn store(&self, rows: &[GroupBan]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_BANS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupBan>> {
        self.load()
    }

    /// The most recent active ban for `(group, user)`, if any
    #[instrument(skip(self))]
    pub fn find_active(&self, group_id: &str, user_id: &str) -> DomainResult<Option<GroupBan>> {
        let now = Utc::now();
        Ok(self
            .load()?
            .into_iter()
            .filter(|b| b.group_id == group_id && b.user_id == user_id && b.is_active_at(now))
            .max_by_key(|b| b.created_at))
    }

    #[instrument(skip(self))]
    pub fn is_banned(&self, group_id: &str, user_id: &str) -> DomainResult<bool> {
        Ok(self.find_active(group_id, user_id)?.is_some())
    }

    /// Full ban history for a group, newest first
    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupBan>> {
        let mut rows: Vec<GroupBan> = self
            .load()?
            .into_iter()
            .filter(|b| b.group_id == group_id)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    /// Append a ban row; a second active ban for the same pair is rejected
    #[instrument(skip(self, ban))]
    pub fn add(&self, ban: GroupBan) -> DomainResult<()> {
        if self.is_banned(&ban.group_id, &ban.user_id)? {
            return Err(DomainError::AlreadyBanned);
        }
        let mut rows = self.load()?;
        rows.push(ban);
        self.store(&rows)
    }

    /// Flip `is_active` off on the given ban row, preserving history
    #[instrument(skip(self))]
    pub fn deactivate(&self, ban_id: &str) -> DomainResult<GroupBan> {
        let mut rows = self.load()?;
        let ban = rows
            .iter_mut()
            .find(|b| b.id == ban_id)
            .ok_or(DomainError::BanNotFound)?;
        ban.is_active = false;
        let updated = ban.clone();
        self.store(&rows)?;
        Ok(updated)
    }
}
