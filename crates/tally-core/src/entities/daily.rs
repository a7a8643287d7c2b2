//! Daily tally entity - votes for a keyword within one day bucket

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Votes for a keyword on a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTally {
    pub key: String,
    pub display: String,
    pub day: NaiveDate,
    pub count: i64,
}

impl DailyTally {
    /// Create a tally for the first vote of a (keyword, day) pair
    pub fn first_vote(key: impl Into<String>, display: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            key: key.into(),
            display: display.into(),
            day,
            count: 1,
        }
    }
}
