//! Route handlers
//!
//! All HTTP request handlers organized by domain. Every handler answers
//! with plain text.

pub mod daily;
pub mod health;
pub mod ranking;
pub mod votes;
