//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of one call.

pub mod context;
pub mod cooldown;
pub mod daily;
pub mod error;
pub mod ranking;
pub mod vote;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use cooldown::{CooldownDecision, CooldownGate};
pub use daily::DailyService;
pub use error::{ServiceError, ServiceResult};
pub use ranking::{parse_page, RankingService, PAGE_SIZE};
pub use vote::VoteService;
