//! PostgreSQL implementation of CooldownStore

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tally_core::traits::{CooldownStore, RepoResult};
use tally_core::CooldownEntry;

use crate::models::CooldownModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CooldownStore
#[derive(Clone)]
pub struct PgCooldownStore {
    pool: PgPool,
}

impl PgCooldownStore {
    /// Create a new PgCooldownStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CooldownStore for PgCooldownStore {
    #[instrument(skip(self))]
    async fn last_vote(&self, voter_id: &str, scope_key: &str) -> RepoResult<Option<CooldownEntry>> {
        let result = sqlx::query_as::<_, CooldownModel>(
            r#"
            SELECT voter_id, keyword, last_vote_ms
            FROM vote_cooldowns
            WHERE voter_id = $1 AND keyword = $2
            "#,
        )
        .bind(voter_id)
        .bind(scope_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CooldownEntry::from))
    }

    // Rows are overwritten, never expired; the window only matters to stores with TTLs
    #[instrument(skip(self, _window))]
    async fn record(&self, entry: &CooldownEntry, _window: Duration) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO vote_cooldowns (voter_id, keyword, last_vote_ms)
            VALUES ($1, $2, $3)
            ON CONFLICT (voter_id, keyword) DO UPDATE SET last_vote_ms = EXCLUDED.last_vote_ms
            "#,
        )
        .bind(&entry.voter_id)
        .bind(&entry.key)
        .bind(entry.last_vote_ms)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
