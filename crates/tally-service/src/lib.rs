//! # tally-service
//!
//! Application layer: the vote protocol (normalize, cooldown gate, atomic
//! increment, cooldown record), ranking views, and the daily leader.
//!
//! Services borrow a [`ServiceContext`] holding the stores and voting rules.
//! Every operation that depends on the clock takes `now` explicitly.

pub mod dto;
pub mod services;

pub use dto::{
    FastestKeyword, KeywordRank, TopPage, UnknownKeyword, VoteOutcome, VoteReceipt,
    COOLDOWN_MESSAGE, NO_VOTES_TODAY_MESSAGE,
};
pub use services::{
    parse_page, CooldownDecision, CooldownGate, DailyService, RankingService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VoteService, PAGE_SIZE,
};
