//! Data transfer objects returned by the services
//!
//! Every response type renders its plain-text body through `Display`.

pub mod responses;

pub use responses::{
    FastestKeyword, KeywordRank, TopPage, UnknownKeyword, VoteOutcome, VoteReceipt,
    COOLDOWN_MESSAGE, NO_VOTES_TODAY_MESSAGE,
};
