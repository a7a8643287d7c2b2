//! Vote database models

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub keyword: String,
    pub display: String,
    pub count: i64,
}

/// Row returned by the total-count upsert
#[derive(Debug, Clone, FromRow)]
pub struct UpsertedVoteModel {
    pub display: String,
    pub count: i64,
}

/// Database model for daily_votes table
#[derive(Debug, Clone, FromRow)]
pub struct DailyVoteModel {
    pub keyword: String,
    pub display: String,
    pub day: NaiveDate,
    pub count: i64,
}
