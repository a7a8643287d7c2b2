//! Cooldown entry - last accepted vote of a voter for a keyword

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Last accepted vote timestamp for a (voter, scope key) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownEntry {
    pub voter_id: String,
    /// Canonical keyword, or the voter-wide scope key
    pub key: String,
    /// Wall-clock milliseconds since the Unix epoch
    pub last_vote_ms: i64,
}

impl CooldownEntry {
    pub fn new(voter_id: impl Into<String>, key: impl Into<String>, last_vote_ms: i64) -> Self {
        Self {
            voter_id: voter_id.into(),
            key: key.into(),
            last_vote_ms,
        }
    }

    /// Time left before another vote may count, or `None` once the window has elapsed.
    ///
    /// A clock that moved backwards counts as zero elapsed time.
    pub fn remaining(&self, now_ms: i64, window: Duration) -> Option<Duration> {
        let window_ms = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
        let elapsed = now_ms.saturating_sub(self.last_vote_ms).max(0);

        if elapsed >= window_ms {
            None
        } else {
            Some(Duration::from_millis((window_ms - elapsed) as u64))
        }
    }
}
