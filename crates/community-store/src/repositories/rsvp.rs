//! RSVP repository
//!
//! RSVPs are unique per `(event_id, user_id)`; re-RSVPing replaces the
//! prior response. Every change recomputes the event's attendee count.

use tracing::instrument;

use community_core::entities::EventRsvp;
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{integrity, keys, SharedAdapter};

/// Repository for `EventRsvp` rows
#[derive(Clone)]
pub struct RsvpRepository {
    adapter: SharedAdapter,
}

impl RsvpRepository {
    /// Create a new RsvpRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<EventRsvp>> {
        self.adapter.read_collection(keys::EVENT_RSVPS)
    }

    fn store(&self, rows: &[EventRsvp]) -> DomainResult<()> {
        self.adapter.write_collection(keys::EVENT_RSVPS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<EventRsvp>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, event_id: &str, user_id: &str) -> DomainResult<Option<EventRsvp>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|r| r.event_id == event_id && r.user_id == user_id))
    }

    #[instrument(skip(self))]
    pub fn list_by_event(&self, event_id: &str) -> DomainResult<Vec<EventRsvp>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.event_id == event_id)
            .collect())
    }

    /// Insert the RSVP, replacing any prior response for `(event, user)`
    #[instrument(skip(self, rsvp))]
    pub fn upsert(&self, rsvp: EventRsvp) -> DomainResult<()> {
        let event_id = rsvp.event_id.clone();
        let mut rows = self.load()?;
        rows.retain(|r| !(r.event_id == rsvp.event_id && r.user_id == rsvp.user_id));
        rows.push(rsvp);
        self.store(&rows)?;
        integrity::recompute_attendee_count(self.adapter.as_ref(), &event_id)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, event_id: &str, user_id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|r| !(r.event_id == event_id && r.user_id == user_id));
        if rows.len() == before {
            return Err(DomainError::RsvpNotFound);
        }
        self.store(&rows)?;
        integrity::recompute_attendee_count(self.adapter.as_ref(), event_id)
    }
}
