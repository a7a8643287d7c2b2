//! Plain-text response bodies
//!
//! Each type carries what a route reports and renders the exact body text.

use std::fmt;
use std::time::Duration;

use tally_core::{abbreviate_count, capitalize, format_time_until, RankedEntry};

/// Body returned when a vote falls inside the cooldown window
pub const COOLDOWN_MESSAGE: &str = "You can't vote consecutively.";

/// Body returned when the current day has no tallies
pub const NO_VOTES_TODAY_MESSAGE: &str = "No votes registered today.";

// ============================================================================
// Vote
// ============================================================================

/// An accepted vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    /// Display stored for the keyword
    pub display: String,
    /// Keyword total after this vote
    pub total: i64,
    /// Keyword count for today after this vote
    pub daily: i64,
    pub voter: String,
}

impl fmt::Display for VoteReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Voted for [ {} ]. {} total votes @{}",
            self.display, self.total, self.voter
        )
    }
}

/// Result of casting a vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Counted(VoteReceipt),
    /// Rejected by the cooldown gate; nothing was written
    CoolingDown { remaining: Duration },
}

impl VoteOutcome {
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted(_))
    }
}

impl fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counted(receipt) => receipt.fmt(f),
            Self::CoolingDown { .. } => f.write_str(COOLDOWN_MESSAGE),
        }
    }
}

// ============================================================================
// Ranking
// ============================================================================

/// Rank of a single keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRank {
    pub display: String,
    pub position: usize,
    pub count: i64,
}

impl From<RankedEntry> for KeywordRank {
    fn from(entry: RankedEntry) -> Self {
        Self {
            display: entry.display,
            position: entry.position,
            count: entry.count,
        }
    }
}

impl fmt::Display for KeywordRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ {} ] Voting ranking is #{} with a total of {} votes.",
            self.display, self.position, self.count
        )
    }
}

/// A rank query for a keyword nobody has voted for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyword {
    /// Name as the caller typed it
    pub name: String,
}

impl fmt::Display for UnknownKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ] has 0 votes.", capitalize(&self.name))
    }
}

/// One page of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopPage {
    pub entries: Vec<RankedEntry>,
}

impl fmt::Display for TopPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VOTES RANKING:")?;
        for (i, entry) in self.entries.iter().enumerate() {
            write!(f, " #{} {}", entry.position, entry.display.to_uppercase())?;
            // Only the page leader shows its count
            if i == 0 {
                write!(f, " ({})", abbreviate_count(entry.count))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Daily
// ============================================================================

/// The keyword with the most votes in the current day bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastestKeyword {
    pub display: String,
    pub count: i64,
    /// Time left until the next day bucket starts
    pub resets_in: Duration,
}

impl fmt::Display for FastestKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current Fastest Keyword: {} [ {} Votes Today ] -> resets in {}",
            self.display.to_uppercase(),
            self.count,
            format_time_until(self.resets_in)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(position: usize, display: &str, count: i64) -> RankedEntry {
        RankedEntry {
            position,
            display: display.to_string(),
            count,
        }
    }

    #[test]
    fn test_vote_receipt_text() {
        let receipt = VoteReceipt {
            display: "Dog".to_string(),
            total: 1,
            daily: 1,
            voter: "alice".to_string(),
        };
        assert_eq!(receipt.to_string(), "Voted for [ Dog ]. 1 total votes @alice");
    }

    #[test]
    fn test_cooldown_text() {
        let outcome = VoteOutcome::CoolingDown {
            remaining: Duration::from_secs(10),
        };
        assert!(!outcome.is_counted());
        assert_eq!(outcome.to_string(), COOLDOWN_MESSAGE);
    }

    #[test]
    fn test_rank_text() {
        let rank = KeywordRank::from(entry(2, "Cat", 30));
        assert_eq!(
            rank.to_string(),
            "[ Cat ] Voting ranking is #2 with a total of 30 votes."
        );
    }

    #[test]
    fn test_unknown_keyword_is_capitalized() {
        let unknown = UnknownKeyword {
            name: "cAT".to_string(),
        };
        assert_eq!(unknown.to_string(), "[ Cat ] has 0 votes.");
    }

    #[test]
    fn test_top_page_text() {
        let page = TopPage {
            entries: vec![entry(1, "Dog", 50), entry(2, "cat", 30), entry(3, "Bird", 10)],
        };
        assert_eq!(
            page.to_string(),
            "VOTES RANKING: #1 DOG (50) #2 CAT #3 BIRD"
        );
    }

    #[test]
    fn test_top_page_abbreviates_leader() {
        let page = TopPage {
            entries: vec![entry(11, "Dog", 1500), entry(12, "Cat", 1400)],
        };
        assert_eq!(page.to_string(), "VOTES RANKING: #11 DOG (1,5K) #12 CAT");
    }

    #[test]
    fn test_empty_top_page() {
        assert_eq!(TopPage::default().to_string(), "VOTES RANKING:");
    }

    #[test]
    fn test_fastest_text() {
        let fastest = FastestKeyword {
            display: "Dog".to_string(),
            count: 7,
            resets_in: Duration::from_secs(3 * 3600 + 5 * 60),
        };
        assert_eq!(
            fastest.to_string(),
            "Current Fastest Keyword: DOG [ 7 Votes Today ] -> resets in 3h 05m"
        );
    }
}
