//! Moderation action repository
//!
//! Append-only audit trail, newest-first, capped at 1000 entries per
//! group; eviction leaves other groups' entries untouched.

use tracing::{debug, instrument};

use community_core::entities::ModerationAction;
use community_core::error::DomainResult;
use community_core::StorageAdapterExt;

use crate::{integrity, keys, SharedAdapter};

/// Repository for `ModerationAction` rows
#[derive(Clone)]
pub struct ModerationActionRepository {
    adapter: SharedAdapter,
}

impl ModerationActionRepository {
    /// Create a new ModerationActionRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<ModerationAction>> {
        self.adapter.read_collection(keys::MODERATION_ACTIONS)
    }

    fn store(&self, rows: &[ModerationAction]) -> DomainResult<()> {
        self.adapter.write_collection(keys::MODERATION_ACTIONS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<ModerationAction>> {
        self.load()
    }

    /// Append an audit entry, evicting the group's oldest beyond the cap
    #[instrument(skip(self, action))]
    pub fn record(&self, action: ModerationAction) -> DomainResult<()> {
        let group_id = action.group_id.clone();
        let mut rows = self.load()?;
        rows.insert(0, action);
        let evicted = integrity::evict_log_overflow(&mut rows, &group_id);
        if evicted > 0 {
            debug!(group_id, evicted, "audit log trimmed");
        }
        self.store(&rows)
    }

    /// Audit entries for a group, newest first
    #[instrument(skip(self))]
    pub fn list_by_group(&self, group_id: &str) -> DomainResult<Vec<ModerationAction>> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryAdapter;
    use community_core::entities::ModerationActionType;
    use std::sync::Arc;

    #[test]
    fn test_audit_log_bound() {
        let repo = ModerationActionRepository::new(Arc::new(MemoryAdapter::new()));
        repo.record(ModerationAction::new(
            "other",
            "g2",
            ModerationActionType::Warn,
            "u9",
            "user",
            "mod1",
        ))
        .unwrap();

        for i in 0..integrity::LOG_CAP_PER_GROUP + 1 {
            repo.record(ModerationAction::new(
                format!("a{i}"),
                "g1",
                ModerationActionType::Warn,
                "u1",
                "user",
                "mod1",
            ))
            .unwrap();
        }

        assert_eq!(repo.count_by_group("g1").unwrap(), integrity::LOG_CAP_PER_GROUP);
        assert_eq!(repo.count_by_group("g2").unwrap(), 1);
    }
}
