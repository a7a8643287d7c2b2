//! Database models (row shapes)

mod cooldown;
mod vote;

pub use cooldown::CooldownModel;
pub use vote::{DailyVoteModel, UpsertedVoteModel, VoteModel};
