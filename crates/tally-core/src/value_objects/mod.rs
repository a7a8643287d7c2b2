//! Value objects - immutable types that represent domain concepts

mod cooldown_scope;
mod day_bucket;
mod keyword;

pub use cooldown_scope::{CooldownScope, VOTER_SCOPE_KEY};
pub use day_bucket::{DayBucket, DEFAULT_TIMEZONE};
pub use keyword::{DisplayCasing, Keyword};
