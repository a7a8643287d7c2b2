//! Vote cooldowns stored in Redis.

mod redis_cooldown;

pub use redis_cooldown::{cooldown_key, RedisCooldownStore, COOLDOWN_PREFIX};
