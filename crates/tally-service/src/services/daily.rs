//! Daily service
//!
//! Finds the keyword leading the current day bucket.

use chrono::{DateTime, Utc};
use tally_core::{DayBucket, DomainError};
use tracing::instrument;

use crate::dto::FastestKeyword;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Daily service
pub struct DailyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DailyService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Leader of the day bucket containing `now`, or `NoVotesToday`
    #[instrument(skip(self))]
    pub async fn fastest_today(&self, now: DateTime<Utc>) -> ServiceResult<FastestKeyword> {
        let tz = self.ctx.voting().timezone;
        let day = DayBucket::of(now, tz);

        let top = self
            .ctx
            .bounded("tally.get_top_for_day", self.ctx.tally_store().get_top_for_day(day))
            .await?
            .ok_or(DomainError::NoVotesToday)?;

        let resets_at = day
            .next_boundary(tz)
            .ok_or_else(|| DomainError::InternalError(format!("no day follows {day}")))?;

        Ok(FastestKeyword {
            display: top.display,
            count: top.count,
            resets_in: (resets_at - now).to_std().unwrap_or_default(),
        })
    }
}
