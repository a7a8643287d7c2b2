//! Cooldown gate
//!
//! Decides whether a voter may have another vote counted for a keyword.
//! The gate is advisory: two requests racing through `check` in the same
//! instant can both be allowed.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tally_core::CooldownEntry;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Verdict of a cooldown check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownDecision {
    Allowed,
    Rejected { remaining: Duration },
}

/// Cooldown gate
pub struct CooldownGate<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CooldownGate<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check the voter's last accepted vote in the configured scope. Never writes.
    #[instrument(skip(self))]
    pub async fn check(
        &self,
        voter_id: &str,
        key: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<CooldownDecision> {
        let voting = self.ctx.voting();
        let scope_key = voting.cooldown_scope.scope_key(key);

        let last = self
            .ctx
            .bounded(
                "cooldown.last_vote",
                self.ctx.cooldown_store().last_vote(voter_id, scope_key),
            )
            .await?;

        let remaining = last.and_then(|entry| entry.remaining(now.timestamp_millis(), voting.cooldown()));
        Ok(match remaining {
            Some(remaining) => CooldownDecision::Rejected { remaining },
            None => CooldownDecision::Allowed,
        })
    }

    /// Store `now` as the voter's last accepted vote in the configured scope
    #[instrument(skip(self))]
    pub async fn record(&self, voter_id: &str, key: &str, now: DateTime<Utc>) -> ServiceResult<()> {
        let voting = self.ctx.voting();
        let entry = CooldownEntry::new(
            voter_id,
            voting.cooldown_scope.scope_key(key),
            now.timestamp_millis(),
        );

        self.ctx
            .bounded(
                "cooldown.record",
                self.ctx.cooldown_store().record(&entry, voting.cooldown()),
            )
            .await?;
        Ok(())
    }
}
