//! Shared fixtures for service tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tally_common::VotingConfig;
use tally_core::traits::{RepoResult, TallyStore};
use tally_core::{DailyTally, DayBucket, VoteCounts, VoteRecord};
use tally_db::MemoryStore;

use super::context::ServiceContext;

/// Context over a fresh memory store, with the store handle for assertions
pub(crate) fn memory_context(voting: VotingConfig) -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let ctx = ServiceContext::builder()
        .tally_store(store.clone())
        .cooldown_store(store.clone())
        .voting(voting)
        .build()
        .unwrap();
    (ctx, store)
}

/// A UTC instant on 2026-10-16
pub(crate) fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, hour, minute, second)
        .unwrap()
}

/// Tally store whose every call takes `delay` before answering
pub(crate) struct SlowStore {
    delay: Duration,
}

impl SlowStore {
    pub(crate) fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TallyStore for SlowStore {
    async fn increment_total(&self, _key: &str, _display: &str) -> RepoResult<i64> {
        tokio::time::sleep(self.delay).await;
        Ok(1)
    }

    async fn increment_daily(&self, _key: &str, _display: &str, _day: DayBucket) -> RepoResult<i64> {
        tokio::time::sleep(self.delay).await;
        Ok(1)
    }

    async fn record_vote(&self, _key: &str, display: &str, _day: DayBucket) -> RepoResult<VoteCounts> {
        tokio::time::sleep(self.delay).await;
        Ok(VoteCounts {
            display: display.to_string(),
            total: 1,
            daily: 1,
        })
    }

    async fn get(&self, _key: &str) -> RepoResult<Option<VoteRecord>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn get_all(&self) -> RepoResult<Vec<VoteRecord>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn get_top_for_day(&self, _day: DayBucket) -> RepoResult<Option<DailyTally>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn health_check(&self) -> RepoResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
