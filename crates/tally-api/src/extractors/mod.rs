//! Request extractors
//!
//! Query parameters arrive as optional strings so that missing or malformed
//! values reach the handlers instead of being rejected by Axum.

mod query;

pub use query::{RankParams, TopParams, VoteParams};
