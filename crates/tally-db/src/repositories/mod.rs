//! PostgreSQL store implementations

mod cooldown;
mod error;
mod tally;

pub use cooldown::PgCooldownStore;
pub use error::map_db_error;
pub use tally::PgTallyStore;
