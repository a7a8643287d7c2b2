//! # tally-db
//!
//! Storage layer implementing the `tally-core` store traits.
//!
//! ## Overview
//!
//! - [`PgTallyStore`] / [`PgCooldownStore`]: PostgreSQL tables with
//!   single-statement upserts for every counter
//! - [`MemoryStore`]: process-local state, optionally mirrored to a JSON
//!   snapshot file after every change
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_db::{create_pool, ensure_schema, PgPoolConfig, PgTallyStore};
//! use tally_core::TallyStore;
//!
//! async fn example(config: &tally_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PgPoolConfig::from(config)).await?;
//!     ensure_schema(&pool).await?;
//!     let store = PgTallyStore::new(pool);
//!
//!     let total = store.increment_total("dog", "Dog").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, ensure_schema, PgPool, PgPoolConfig};
pub use repositories::{PgCooldownStore, PgTallyStore};
