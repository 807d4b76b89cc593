//! Event service
//!
//! RSVP handling with replace semantics; the attendee count is recomputed
//! from the RSVP rows after every change.

use tracing::{info, instrument};
use validator::Validate;

use community_core::{EventRsvp, GroupEvent, RsvpStatus};

use crate::dto::CreateEventRequest;

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    /// Create an event from a validated request
    #[instrument(skip(self, request))]
    pub fn create_event(&self, request: CreateEventRequest) -> ServiceResult<GroupEvent> {
        request.validate()?;

        self.ctx
            .groups()
            .find(&request.group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", request.group_id.clone()))?;

        let mut event = GroupEvent::new(
            self.ctx.generate_id(),
            &request.group_id,
            &request.title,
            request.start_date,
        );
        event.description = request.description.unwrap_or_default();
        event.location = request.location;
        event.end_date = request.end_date;

        self.ctx.events().add(event.clone())?;
        info!(event_id = %event.id, group_id = %event.group_id, "event created");
        Ok(event)
    }

    /// Record (or replace) an RSVP, returning the event with a fresh count
    #[instrument(skip(self))]
    pub fn rsvp(
        &self,
        event_id: &str,
        user_id: &str,
        status: RsvpStatus,
    ) -> ServiceResult<GroupEvent> {
        self.ctx
            .events()
            .find(event_id)?
            .ok_or_else(|| ServiceError::not_found("Event", event_id))?;

        self.ctx
            .rsvps()
            .upsert(EventRsvp::new(event_id, user_id, status))?;

        info!(event_id, user_id, ?status, "rsvp recorded");
        self.refreshed(event_id)
    }

    /// Withdraw an RSVP entirely
    #[instrument(skip(self))]
    pub fn cancel_rsvp(&self, event_id: &str, user_id: &str) -> ServiceResult<GroupEvent> {
        self.ctx.rsvps().remove(event_id, user_id)?;
        info!(event_id, user_id, "rsvp withdrawn");
        self.refreshed(event_id)
    }

    fn refreshed(&self, event_id: &str) -> ServiceResult<GroupEvent> {
        self.ctx
            .events()
            .find(event_id)?
            .ok_or_else(|| ServiceError::not_found("Event", event_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use community_core::{Group, GroupType};
    use community_store::MemoryAdapter;
    use std::sync::Arc;

    fn setup() -> (StoreContext, GroupEvent) {
        let ctx = StoreContext::new(Arc::new(MemoryAdapter::new()));
        ctx.groups()
            .add(Group::new("g1", "pals", "Pals", "c1", GroupType::Open))
            .unwrap();
        let event = EventService::new(&ctx)
            .create_event(CreateEventRequest {
                group_id: "g1".to_string(),
                title: "Park meetup".to_string(),
                description: None,
                location: Some("Central Park".to_string()),
                start_date: Utc::now() + Duration::days(1),
                end_date: None,
            })
            .unwrap();
        (ctx, event)
    }

    #[test]
    fn test_rsvp_replace_adjusts_count() {
        let (ctx, event) = setup();
        let service = EventService::new(&ctx);

        let after = service.rsvp(&event.id, "u1", RsvpStatus::Going).unwrap();
        assert_eq!(after.attendee_count, 1);

        let after = service.rsvp(&event.id, "u1", RsvpStatus::Maybe).unwrap();
        assert_eq!(after.attendee_count, 0);

        let after = service.rsvp(&event.id, "u1", RsvpStatus::Going).unwrap();
        assert_eq!(after.attendee_count, 1);
    }

    #[test]
    fn test_rsvp_unknown_event() {
        let (ctx, _) = setup();
        let err = EventService::new(&ctx)
            .rsvp("missing", "u1", RsvpStatus::Going)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
