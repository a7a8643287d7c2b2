//! # tally-core
//!
//! Domain layer containing tally entities, value objects, store traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod format;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{CooldownEntry, DailyTally, RankedEntry, VoteCounts, VoteRecord};
pub use error::DomainError;
pub use format::{abbreviate_count, capitalize, format_time_until};
pub use traits::{CooldownStore, RepoResult, TallyStore};
pub use value_objects::{
    CooldownScope, DayBucket, DisplayCasing, Keyword, DEFAULT_TIMEZONE, VOTER_SCOPE_KEY,
};
