//! Vote service
//!
//! Runs the vote protocol: normalize the message, consult the cooldown
//! gate, apply both increments atomically, then record the cooldown.

use chrono::{DateTime, Utc};
use tally_core::{DayBucket, DomainError, Keyword};
use tracing::{debug, info, instrument, warn};

use crate::dto::{VoteOutcome, VoteReceipt};

use super::context::ServiceContext;
use super::cooldown::{CooldownDecision, CooldownGate};
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote from `user` for the first word of `msg`.
    ///
    /// A blank user or message fails with `EmptyInput` before any store is
    /// touched. A vote inside the cooldown window is reported as
    /// [`VoteOutcome::CoolingDown`] and changes nothing.
    #[instrument(skip(self))]
    pub async fn cast(&self, user: &str, msg: &str, now: DateTime<Utc>) -> ServiceResult<VoteOutcome> {
        let voter = user.trim();
        if voter.is_empty() {
            return Err(DomainError::EmptyInput.into());
        }
        let voting = self.ctx.voting();
        let keyword = Keyword::parse(msg, voting.display_casing)?;

        let gate = CooldownGate::new(self.ctx);
        if let CooldownDecision::Rejected { remaining } = gate.check(voter, keyword.key(), now).await? {
            debug!(
                voter,
                keyword = %keyword,
                remaining_ms = remaining.as_millis() as u64,
                "Vote rejected by cooldown"
            );
            return Ok(VoteOutcome::CoolingDown { remaining });
        }

        let day = DayBucket::of(now, voting.timezone);
        let counts = self
            .ctx
            .bounded(
                "tally.record_vote",
                self.ctx
                    .tally_store()
                    .record_vote(keyword.key(), keyword.display(), day),
            )
            .await?;

        // The increment is already durable; a failed cooldown write only
        // lets this voter in early once.
        if let Err(e) = gate.record(voter, keyword.key(), now).await {
            warn!(voter, keyword = %keyword, error = %e, "Failed to record vote cooldown");
        }

        info!(
            voter,
            keyword = %keyword,
            total = counts.total,
            daily = counts.daily,
            day = %day,
            "Vote counted"
        );

        Ok(VoteOutcome::Counted(VoteReceipt {
            display: counts.display,
            total: counts.total,
            daily: counts.daily,
            voter: voter.to_string(),
        }))
    }
}
