//! Poll service
//!
//! Vote casting with single-active-vote-per-user semantics: a new vote
//! replaces the prior one, never adds to it. Tallies are recomputed from
//! the vote rows after every change.

use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;

use community_core::{DomainError, GroupPoll, PollOption, PollVote};

use crate::dto::CreatePollRequest;

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

/// Poll service
pub struct PollService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    /// Create a poll from a validated request
    #[instrument(skip(self, request))]
    pub fn create_poll(&self, request: CreatePollRequest) -> ServiceResult<GroupPoll> {
        request.validate()?;

        self.ctx
            .groups()
            .find(&request.group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", request.group_id.clone()))?;

        let options = request
            .options
            .iter()
            .map(|label| PollOption::new(self.ctx.generate_id(), label))
            .collect();

        let mut poll = GroupPoll::new(
            self.ctx.generate_id(),
            &request.group_id,
            &request.question,
            options,
        );
        poll.topic_id = request.topic_id;
        poll.closes_at = request.closes_at;

        self.ctx.polls().add(poll.clone())?;
        info!(poll_id = %poll.id, group_id = %poll.group_id, "poll created");
        Ok(poll)
    }

    /// Cast (or replace) a vote, returning the poll with fresh tallies
    #[instrument(skip(self))]
    pub fn cast_vote(
        &self,
        poll_id: &str,
        user_id: &str,
        option_ids: Vec<String>,
    ) -> ServiceResult<GroupPoll> {
        let poll = self
            .ctx
            .polls()
            .find(poll_id)?
            .ok_or_else(|| ServiceError::not_found("Poll", poll_id))?;

        if poll.is_closed_at(Utc::now()) {
            return Err(DomainError::PollClosed.into());
        }
        if option_ids.is_empty() {
            return Err(ServiceError::validation("vote must select at least one option"));
        }
        for option_id in &option_ids {
            if !poll.has_option(option_id) {
                return Err(DomainError::OptionNotFound(option_id.clone()).into());
            }
        }

        self.ctx
            .poll_votes()
            .upsert(PollVote::new(poll_id, user_id, option_ids))?;

        info!(poll_id, user_id, "vote recorded");
        self.refreshed(poll_id)
    }

    /// Explicit unvote, returning the poll with fresh tallies
    #[instrument(skip(self))]
    pub fn retract_vote(&self, poll_id: &str, user_id: &str) -> ServiceResult<GroupPoll> {
        self.ctx.poll_votes().remove(poll_id, user_id)?;
        info!(poll_id, user_id, "vote retracted");
        self.refreshed(poll_id)
    }

    fn refreshed(&self, poll_id: &str) -> ServiceResult<GroupPoll> {
        self.ctx
            .polls()
            .find(poll_id)?
            .ok_or_else(|| ServiceError::not_found("Poll", poll_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use community_core::entities::GroupPollPatch;
    use community_core::{Group, GroupType};
    use community_store::MemoryAdapter;
    use std::sync::Arc;

    fn setup() -> (StoreContext, GroupPoll) {
        let ctx = StoreContext::new(Arc::new(MemoryAdapter::new()));
        ctx.groups()
            .add(Group::new("g1", "pals", "Pals", "c1", GroupType::Open))
            .unwrap();
        let poll = PollService::new(&ctx)
            .create_poll(CreatePollRequest {
                group_id: "g1".to_string(),
                topic_id: None,
                question: "Best snack?".to_string(),
                options: vec!["Carrots".to_string(), "Apples".to_string()],
                closes_at: None,
            })
            .unwrap();
        (ctx, poll)
    }

    #[test]
    fn test_revote_swings_tally() {
        let (ctx, poll) = setup();
        let service = PollService::new(&ctx);
        let x = poll.options[0].id.clone();
        let y = poll.options[1].id.clone();

        let after_first = service.cast_vote(&poll.id, "u1", vec![x.clone()]).unwrap();
        assert_eq!(after_first.vote_count, 1);
        assert_eq!(after_first.options[0].vote_count, 1);
        assert_eq!(after_first.options[1].vote_count, 0);

        let after_swap = service.cast_vote(&poll.id, "u1", vec![y]).unwrap();
        assert_eq!(after_swap.vote_count, 1);
        assert_eq!(after_swap.options[0].vote_count, 0);
        assert_eq!(after_swap.options[1].vote_count, 1);
    }

    #[test]
    fn test_closed_poll_rejects_votes() {
        let (ctx, poll) = setup();
        ctx.polls()
            .update(
                &poll.id,
                GroupPollPatch {
                    closes_at: Some(Some(Utc::now() - Duration::hours(1))),
                    ..Default::default()
                },
            )
            .unwrap();

        let option = poll.options[0].id.clone();
        let err = PollService::new(&ctx)
            .cast_vote(&poll.id, "u1", vec![option])
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::PollClosed)));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let (ctx, poll) = setup();
        let err = PollService::new(&ctx)
            .cast_vote(&poll.id, "u1", vec!["bogus".to_string()])
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::OptionNotFound(_))
        ));
    }

    #[test]
    fn test_retract_clears_tally() {
        let (ctx, poll) = setup();
        let service = PollService::new(&ctx);
        let x = poll.options[0].id.clone();

        service.cast_vote(&poll.id, "u1", vec![x]).unwrap();
        let after = service.retract_vote(&poll.id, "u1").unwrap();
        assert_eq!(after.vote_count, 0);
        assert_eq!(after.options[0].vote_count, 0);
    }

    #[test]
    fn test_poll_needs_two_options() {
        let (ctx, _) = setup();
        let err = PollService::new(&ctx)
            .create_poll(CreatePollRequest {
                group_id: "g1".to_string(),
                topic_id: None,
                question: "Only one?".to_string(),
                options: vec!["lonely".to_string()],
                closes_at: None,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
