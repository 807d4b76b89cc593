//! Poll vote repository
//!
//! Votes are unique per `(poll_id, user_id)`: `upsert` replaces any prior
//! vote from the same user rather than adding to it. Every insert or
//! removal triggers a full tally recompute.

use tracing::{debug, instrument};

use community_core::entities::PollVote;
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{integrity, keys, SharedAdapter};

/// Repository for `PollVote` rows
#[derive(Clone)]
pub struct PollVoteRepository {
    adapter: SharedAdapter,
}

impl PollVoteRepository {
    /// Create a new PollVoteRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<PollVote>> {
        self.adapter.read_collection(keys::POLL_VOTES)
    }

    fn store(&self, rows: &[PollVote]) -> DomainResult<()> {
        self.adapter.write_collection(keys::POLL_VOTES, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<PollVote>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, poll_id: &str, user_id: &str) -> DomainResult<Option<PollVote>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|v| v.poll_id == poll_id && v.user_id == user_id))
    }

    #[instrument(skip(self))]
    pub fn list_by_poll(&self, poll_id: &str) -> DomainResult<Vec<PollVote>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|v| v.poll_id == poll_id)
            .collect())
    }

    /// Insert the vote, replacing any prior vote for the same `(poll, user)`
    #[instrument(skip(self, vote))]
    pub fn upsert(&self, vote: PollVote) -> DomainResult<()> {
        let poll_id = vote.poll_id.clone();
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|v| !(v.poll_id == vote.poll_id && v.user_id == vote.user_id));
        if rows.len() < before {
            debug!(poll_id = %vote.poll_id, user_id = %vote.user_id, "replacing prior vote");
        }
        rows.push(vote);
        self.store(&rows)?;
        integrity::recompute_poll_tallies(self.adapter.as_ref(), &poll_id)
    }

    /// Explicit unvote
    #[instrument(skip(self))]
    pub fn remove(&self, poll_id: &str, user_id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|v| !(v.poll_id == poll_id && v.user_id == user_id));
        if rows.len() == before {
            return Err(DomainError::VoteNotFound);
        }
        self.store(&rows)?;
        integrity::recompute_poll_tallies(self.adapter.as_ref(), poll_id)
    }
}
