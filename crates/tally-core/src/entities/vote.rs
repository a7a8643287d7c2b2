//! Vote record entity - the running total for one keyword

use serde::{Deserialize, Serialize};

/// Total votes for a canonical keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Canonical lowercase keyword
    pub key: String,
    /// Display string as first submitted; never rewritten
    pub display: String,
    /// Number of accepted votes
    pub count: i64,
}

impl VoteRecord {
    /// Create a record for a keyword's first accepted vote
    pub fn first_vote(key: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display: display.into(),
            count: 1,
        }
    }

    /// Check whether this record belongs to the given canonical key
    #[inline]
    pub fn is_key(&self, key: &str) -> bool {
        self.key == key
    }
}

/// Counters after a vote has been applied to total and daily tallies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCounts {
    /// Display stored for the keyword (the first writer's)
    pub display: String,
    /// Total count after the increment
    pub total: i64,
    /// Count for the day bucket after the increment
    pub daily: i64,
}

/// One line of a ranking view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based position in the full ordering
    pub position: usize,
    pub display: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_vote() {
        let record = VoteRecord::first_vote("dog", "Dog");
        assert_eq!(record.key, "dog");
        assert_eq!(record.display, "Dog");
        assert_eq!(record.count, 1);
    }

    #[test]
    fn test_is_key() {
        let record = VoteRecord::first_vote("dog", "DOG");
        assert!(record.is_key("dog"));
        assert!(!record.is_key("DOG"));
    }
}
