//! Table definitions
//!
//! `id` columns are creation sequences; every ordering breaks count ties on them.

use sqlx::PgPool;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS votes (
    id         BIGSERIAL PRIMARY KEY,
    keyword    TEXT        NOT NULL UNIQUE,
    display    TEXT        NOT NULL,
    count      BIGINT      NOT NULL DEFAULT 0 CHECK (count >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS daily_votes (
    id      BIGSERIAL PRIMARY KEY,
    keyword TEXT   NOT NULL,
    day     DATE   NOT NULL,
    display TEXT   NOT NULL,
    count   BIGINT NOT NULL DEFAULT 0 CHECK (count >= 0),
    UNIQUE (keyword, day)
);

CREATE INDEX IF NOT EXISTS idx_daily_votes_day_count
    ON daily_votes (day, count DESC, id);

CREATE TABLE IF NOT EXISTS vote_cooldowns (
    voter_id     TEXT   NOT NULL,
    keyword      TEXT   NOT NULL,
    last_vote_ms BIGINT NOT NULL,
    PRIMARY KEY (voter_id, keyword)
);
"#;

/// Create the tally tables if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::info!("Tally schema ready");
    Ok(())
}
