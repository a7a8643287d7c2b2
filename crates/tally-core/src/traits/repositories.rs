//! Store traits (ports) - define the interface for tally persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (memory, JSON snapshot, PostgreSQL, Redis).

use std::time::Duration;

use async_trait::async_trait;

use crate::entities::{CooldownEntry, DailyTally, VoteCounts, VoteRecord};
use crate::error::DomainError;
use crate::value_objects::DayBucket;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Tally Store
// ============================================================================

/// Durable vote counters.
///
/// Every increment is a single create-or-increment operation at the storage
/// layer: concurrent callers never lose updates, and `display` is written only
/// when the row is created.
#[async_trait]
pub trait TallyStore: Send + Sync {
    /// Create the keyword's record with `count = 1`, or increment it.
    /// Returns the count after the increment.
    async fn increment_total(&self, key: &str, display: &str) -> RepoResult<i64>;

    /// Same as [`TallyStore::increment_total`], scoped to one day bucket
    async fn increment_daily(&self, key: &str, display: &str, day: DayBucket) -> RepoResult<i64>;

    /// Apply the total and daily increments as one atomic unit.
    ///
    /// The daily tally takes the display stored on the keyword's record, so a
    /// keyword renders the same way in every view.
    async fn record_vote(&self, key: &str, display: &str, day: DayBucket) -> RepoResult<VoteCounts>;

    /// Look up a single keyword
    async fn get(&self, key: &str) -> RepoResult<Option<VoteRecord>>;

    /// All records, highest count first; equal counts keep creation order
    async fn get_all(&self) -> RepoResult<Vec<VoteRecord>>;

    /// The day's leading tally; equal counts resolve to the earliest created
    async fn get_top_for_day(&self, day: DayBucket) -> RepoResult<Option<DailyTally>>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Cooldown Store
// ============================================================================

/// Last-accepted-vote timestamps per (voter, scope key)
#[async_trait]
pub trait CooldownStore: Send + Sync {
    /// Fetch the entry for a voter and scope key
    async fn last_vote(&self, voter_id: &str, scope_key: &str) -> RepoResult<Option<CooldownEntry>>;

    /// Overwrite the entry with a new accepted-vote timestamp.
    ///
    /// `window` lets stores with native expiry drop the entry once it can no
    /// longer reject a vote.
    async fn record(&self, entry: &CooldownEntry, window: Duration) -> RepoResult<()>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
