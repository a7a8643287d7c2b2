//! Cooldown database model

use sqlx::FromRow;

/// Database model for vote_cooldowns table
#[derive(Debug, Clone, FromRow)]
pub struct CooldownModel {
    pub voter_id: String,
    pub keyword: String,
    pub last_vote_ms: i64,
}
