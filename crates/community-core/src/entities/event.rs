//! Event entities - group events and RSVPs
//!
//! `attendee_count` is derived from the RSVP rows with status `going` and
//! recomputed on every RSVP change. An RSVP is unique per
//! `(event_id, user_id)`; re-RSVPing replaces the prior response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RSVP response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    Maybe,
    NotGoing,
}

/// Group event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEvent {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub attendee_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroupEvent {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            group_id: group_id.into(),
            title: title.into(),
            description: String::new(),
            location: None,
            start_date,
            end_date: None,
            attendee_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: GroupEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a GroupEvent; `attendee_count` is derived and absent
#[derive(Debug, Clone, Default)]
pub struct GroupEventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<Option<String>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
}

/// One user's RSVP to an event, unique per `(event_id, user_id)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRsvp {
    pub event_id: String,
    pub user_id: String,
    pub status: RsvpStatus,
    pub responded_at: DateTime<Utc>,
}

impl EventRsvp {
    pub fn new(
        event_id: impl Into<String>,
        user_id: impl Into<String>,
        status: RsvpStatus,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            status,
            responded_at: Utc::now(),
        }
    }

    /// Whether this response counts toward the attendee tally
    #[inline]
    pub fn is_going(&self) -> bool {
        self.status == RsvpStatus::Going
    }
}
