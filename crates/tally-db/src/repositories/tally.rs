//! PostgreSQL implementation of TallyStore

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use tally_core::traits::{RepoResult, TallyStore};
use tally_core::{DailyTally, DayBucket, VoteCounts, VoteRecord};

use crate::models::{DailyVoteModel, UpsertedVoteModel, VoteModel};

use super::error::map_db_error;

/// PostgreSQL implementation of TallyStore
#[derive(Clone)]
pub struct PgTallyStore {
    pool: PgPool,
}

impl PgTallyStore {
    /// Create a new PgTallyStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn upsert_total<'e, E>(executor: E, key: &str, display: &str) -> RepoResult<UpsertedVoteModel>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, UpsertedVoteModel>(
            r#"
            INSERT INTO votes (keyword, display, count)
            VALUES ($1, $2, 1)
            ON CONFLICT (keyword) DO UPDATE SET count = votes.count + 1
            RETURNING display, count
            "#,
        )
        .bind(key)
        .bind(display)
        .fetch_one(executor)
        .await
        .map_err(map_db_error)
    }

    async fn upsert_daily<'e, E>(
        executor: E,
        key: &str,
        display: &str,
        day: DayBucket,
    ) -> RepoResult<i64>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO daily_votes (keyword, day, display, count)
            VALUES ($1, $2, $3, 1)
            ON CONFLICT (keyword, day) DO UPDATE SET count = daily_votes.count + 1
            RETURNING count
            "#,
        )
        .bind(key)
        .bind(day.date())
        .bind(display)
        .fetch_one(executor)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl TallyStore for PgTallyStore {
    #[instrument(skip(self, display))]
    async fn increment_total(&self, key: &str, display: &str) -> RepoResult<i64> {
        let row = Self::upsert_total(&self.pool, key, display).await?;
        Ok(row.count)
    }

    #[instrument(skip(self, display))]
    async fn increment_daily(&self, key: &str, display: &str, day: DayBucket) -> RepoResult<i64> {
        Self::upsert_daily(&self.pool, key, display, day).await
    }

    #[instrument(skip(self, display))]
    async fn record_vote(&self, key: &str, display: &str, day: DayBucket) -> RepoResult<VoteCounts> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let total = Self::upsert_total(&mut *tx, key, display).await?;
        let daily = Self::upsert_daily(&mut *tx, key, &total.display, day).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(VoteCounts {
            display: total.display,
            total: total.count,
            daily,
        })
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<VoteRecord>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT keyword, display, count
            FROM votes
            WHERE keyword = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(VoteRecord::from))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> RepoResult<Vec<VoteRecord>> {
        let results = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT keyword, display, count
            FROM votes
            ORDER BY count DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(VoteRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_top_for_day(&self, day: DayBucket) -> RepoResult<Option<DailyTally>> {
        let result = sqlx::query_as::<_, DailyVoteModel>(
            r#"
            SELECT keyword, display, day, count
            FROM daily_votes
            WHERE day = $1
            ORDER BY count DESC, id ASC
            LIMIT 1
            "#,
        )
        .bind(day.date())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DailyTally::from))
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
