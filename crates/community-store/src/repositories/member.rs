//! Member repository
//!
//! Membership rows are unique per `(group_id, user_id)`. Adds and removes
//! keep `Group.member_count` in step through the integrity layer.

use tracing::instrument;

use community_core::entities::{GroupMember, GroupMemberPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{integrity, keys, SharedAdapter};

/// Repository for `GroupMember` rows
#[derive(Clone)]
pub struct MemberRepository {
    adapter: SharedAdapter,
}

impl MemberRepository {
    /// Create a new MemberRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<GroupMember>> {
        self.adapter.read_collection(keys::GROUP_MEMBERS)
    }

    fn store(&self, rows: &[GroupMember]) -> DomainResult<()> {
        self.adapter.write_collection(keys::GROUP_MEMBERS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<GroupMember>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, group_id: &str, user_id: &str) -> DomainResult<Option<GroupMember>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|m| m.group_id == group_id && m.user_id == user_id))
    }

    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<GroupMember>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|m| m.group_id == group_id)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn list_by_user(&self, user_id: &str) -> DomainResult<Vec<GroupMember>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|m| m.user_id == user_id)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn is_member(&self, group_id: &str, user_id: &str) -> DomainResult<bool> {
        Ok(self.find(group_id, user_id)?.is_some())
    }

    #[instrument(skip(self, member))]
    pub fn add(&self, member: GroupMember) -> DomainResult<()> {
        let mut rows = self.load()?;
        if rows
            .iter()
            .any(|m| m.group_id == member.group_id && m.user_id == member.user_id)
        {
            return Err(DomainError::AlreadyMember);
        }
        let group_id = member.group_id.clone();
        rows.push(member);
        self.store(&rows)?;
        integrity::bump_member_count(self.adapter.as_ref(), &group_id, true)
    }

    #[instrument(skip(self, patch))]
    pub fn update(
        &self,
        group_id: &str,
        user_id: &str,
        patch: GroupMemberPatch,
    ) -> DomainResult<GroupMember> {
        let mut rows = self.load()?;
        let member = rows
            .iter_mut()
            .find(|m| m.group_id == group_id && m.user_id == user_id)
            .ok_or(DomainError::MemberNotFound)?;
        member.apply(patch);
        let updated = member.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, group_id: &str, user_id: &str) -> DomainResult<()> {
        if !self.remove_if_present(group_id, user_id)? {
            return Err(DomainError::MemberNotFound);
        }
        Ok(())
    }

    /// Remove the membership row if it exists, returning whether it did
    ///
    /// Used by the ban workflow, where removing a non-member is not an error.
    #[instrument(skip(self))]
    pub fn remove_if_present(&self, group_id: &str, user_id: &str) -> DomainResult<bool> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|m| !(m.group_id == group_id && m.user_id == user_id));
        if rows.len() == before {
            return Ok(false);
        }
        self.store(&rows)?;
        integrity::bump_member_count(self.adapter.as_ref(), group_id, false)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryAdapter;
    use crate::repositories::GroupRepository;
    use community_core::entities::{Group, GroupType};
    use community_core::value_objects::GroupRole;
    use std::sync::Arc;

    fn setup() -> (GroupRepository, MemberRepository) {
        let adapter: SharedAdapter = Arc::new(MemoryAdapter::new());
        let groups = GroupRepository::new(adapter.clone());
        groups
            .add(Group::new("g1", "pals", "Pals", "c1", GroupType::Open))
            .unwrap();
        (groups, MemberRepository::new(adapter))
    }

    #[test]
    fn test_add_increments_member_count() {
        let (groups, members) = setup();
        members
            .add(GroupMember::new("m1", "g1", "u1", GroupRole::Owner))
            .unwrap();
        members
            .add(GroupMember::new("m2", "g1", "u2", GroupRole::Member))
            .unwrap();

        assert_eq!(groups.find("g1").unwrap().unwrap().member_count, 2);
    }

    #[test]
    fn test_duplicate_membership_rejected() {
        let (_, members) = setup();
        members
            .add(GroupMember::new("m1", "g1", "u1", GroupRole::Member))
            .unwrap();
        let err = members
            .add(GroupMember::new("m2", "g1", "u1", GroupRole::Member))
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyMember));
    }

    #[test]
    fn test_remove_decrements_and_then_not_found() {
        let (groups, members) = setup();
        members
            .add(GroupMember::new("m1", "g1", "u1", GroupRole::Member))
            .unwrap();

        members.remove("g1", "u1").unwrap();
        assert_eq!(groups.find("g1").unwrap().unwrap().member_count, 0);
        assert!(members.find("g1", "u1").unwrap().is_none());

        // Double remove errs without driving the counter negative
        assert!(members.remove("g1", "u1").is_err());
        assert_eq!(groups.find("g1").unwrap().unwrap().member_count, 0);
    }

    #[test]
    fn test_remove_if_present_on_absent_row() {
        let (_, members) = setup();
        assert!(!members.remove_if_present("g1", "u1").unwrap());
    }
}
