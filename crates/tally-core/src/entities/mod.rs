//! Domain entities - persisted tallies and cooldown entries

mod cooldown;
mod daily;
mod vote;

pub use cooldown::CooldownEntry;
pub use daily::DailyTally;
pub use vote::{RankedEntry, VoteCounts, VoteRecord};
