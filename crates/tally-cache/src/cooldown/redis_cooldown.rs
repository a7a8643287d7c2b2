//! Redis implementation of CooldownStore.
//!
//! Each entry is a plain integer (milliseconds since the epoch) under
//! `cooldown:{voter_len}:{voter}:{scope}` with a PX expiry equal to the window, so
//! Redis drops entries that can no longer reject a vote.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::instrument;

use tally_core::traits::{CooldownStore, RepoResult};
use tally_core::{CooldownEntry, DomainError};

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for cooldown entries
pub const COOLDOWN_PREFIX: &str = "cooldown:";

/// Build the Redis key for a voter and scope key.
///
/// The voter's byte length comes first, so ids and keywords containing `:`
/// still map each pair to its own key.
pub fn cooldown_key(voter_id: &str, scope_key: &str) -> String {
    format!("{COOLDOWN_PREFIX}{}:{voter_id}:{scope_key}", voter_id.len())
}

impl From<RedisPoolError> for DomainError {
    fn from(err: RedisPoolError) -> Self {
        tracing::error!(error = %err, "Redis operation failed");
        DomainError::storage(err)
    }
}

/// Cooldown store backed by Redis
#[derive(Debug, Clone)]
pub struct RedisCooldownStore {
    pool: RedisPool,
}

impl RedisCooldownStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CooldownStore for RedisCooldownStore {
    #[instrument(skip(self))]
    async fn last_vote(&self, voter_id: &str, scope_key: &str) -> RepoResult<Option<CooldownEntry>> {
        let mut conn = self.pool.get().await?;
        let stored: Option<i64> = conn
            .get(cooldown_key(voter_id, scope_key))
            .await
            .map_err(RedisPoolError::from)?;

        Ok(stored.map(|ms| CooldownEntry::new(voter_id, scope_key, ms)))
    }

    #[instrument(skip(self, entry), fields(voter_id = %entry.voter_id, key = %entry.key))]
    async fn record(&self, entry: &CooldownEntry, window: Duration) -> RepoResult<()> {
        // PX 0 is rejected by Redis, and a zero window never blocks anyway
        let ttl_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        if ttl_ms == 0 {
            return Ok(());
        }

        let mut conn = self.pool.get().await?;
        conn.pset_ex::<_, _, ()>(
            cooldown_key(&entry.voter_id, &entry.key),
            entry.last_vote_ms,
            ttl_ms,
        )
        .await
        .map_err(RedisPoolError::from)?;

        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        self.pool.health_check().await?;
        Ok(())
    }
}
