//! Poll entities - group polls and their votes
//!
//! `vote_count` on the poll and on each option is derived from the vote
//! rows and must be recomputed, never hand-edited. A vote is unique per
//! `(poll_id, user_id)`; a new vote from the same user replaces the prior
//! one. Multi-select polls are supported through `option_ids`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selectable option of a poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: String,
    pub label: String,
    pub vote_count: u32,
}

impl PollOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            vote_count: 0,
        }
    }
}

/// Group poll entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPoll {
    pub id: String,
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    pub question: String,
    pub options: Vec<PollOption>,
    pub vote_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroupPoll {
    /// Create a new open poll with zeroed tallies
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        question: impl Into<String>,
        options: Vec<PollOption>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            group_id: group_id.into(),
            topic_id: None,
            question: question.into(),
            options,
            vote_count: 0,
            closes_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Closed iff `closes_at` is set and not in the future of `now`
    #[inline]
    pub fn is_closed_at(&self, now: DateTime<Utc>) -> bool {
        self.closes_at.is_some_and(|closes| closes <= now)
    }

    /// Check that an option id belongs to this poll
    #[inline]
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: GroupPollPatch) {
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(closes_at) = patch.closes_at {
            self.closes_at = closes_at;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a GroupPoll
///
/// Tallies and options are absent: tallies are derived, and reshaping the
/// option set under existing votes is not supported.
#[derive(Debug, Clone, Default)]
pub struct GroupPollPatch {
    pub question: Option<String>,
    /// `Some(None)` clears the close time, reopening the poll
    pub closes_at: Option<Option<DateTime<Utc>>>,
}

/// One user's vote on a poll, unique per `(poll_id, user_id)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollVote {
    pub poll_id: String,
    pub user_id: String,
    pub option_ids: Vec<String>,
}

impl PollVote {
    pub fn new(
        poll_id: impl Into<String>,
        user_id: impl Into<String>,
        option_ids: Vec<String>,
    ) -> Self {
        Self {
            poll_id: poll_id.into(),
            user_id: user_id.into(),
            option_ids,
        }
    }

    /// Whether this vote counts toward the given option
    #[inline]
    pub fn selects(&self, option_id: &str) -> bool {
        self.option_ids.iter().any(|id| id == option_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn poll_with_options() -> GroupPoll {
        GroupPoll::new(
            "p1",
            "g1",
            "Best snack?",
            vec![PollOption::new("x", "Carrots"), PollOption::new("y", "Apples")],
        )
    }

    #[test]
    fn test_poll_open_without_close_time() {
        let poll = poll_with_options();
        assert!(!poll.is_closed_at(Utc::now()));
    }

    #[test]
    fn test_poll_closes_at_boundary() {
        let mut poll = poll_with_options();
        let now = Utc::now();

        poll.closes_at = Some(now + Duration::hours(1));
        assert!(!poll.is_closed_at(now));

        poll.closes_at = Some(now);
        assert!(poll.is_closed_at(now));

        poll.closes_at = Some(now - Duration::hours(1));
        assert!(poll.is_closed_at(now));
    }

    #[test]
    fn test_has_option() {
        let poll = poll_with_options();
        assert!(poll.has_option("x"));
        assert!(!poll.has_option("z"));
    }

    #[test]
    fn test_vote_selects() {
        let vote = PollVote::new("p1", "u1", vec!["x".to_string(), "y".to_string()]);
        assert!(vote.selects("x"));
        assert!(vote.selects("y"));
        assert!(!vote.selects("z"));
    }

    #[test]
    fn test_reopen_via_patch() {
        let mut poll = poll_with_options();
        let now = Utc::now();
        poll.closes_at = Some(now - Duration::hours(1));
        assert!(poll.is_closed_at(now));

        poll.apply(GroupPollPatch {
            closes_at: Some(None),
            ..Default::default()
        });
        assert!(!poll.is_closed_at(now));
    }
}
