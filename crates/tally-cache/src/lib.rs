//! # tally-cache
//!
//! Redis layer for the vote cooldown gate.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Cooldowns**: Last-vote timestamps that expire on their own once the window passes
//!
//! ## Example
//!
//! ```ignore
//! use tally_cache::{RedisCooldownStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cooldowns = RedisCooldownStore::new(pool);
//!
//! let entry = CooldownEntry::new("alice", "dog", now_ms);
//! cooldowns.record(&entry, Duration::from_secs(60)).await?;
//! ```

pub mod cooldown;
pub mod pool;

pub use cooldown::{cooldown_key, RedisCooldownStore, COOLDOWN_PREFIX};
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
