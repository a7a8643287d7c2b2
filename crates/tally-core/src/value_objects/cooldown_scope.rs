//! Cooldown scope - what a voter's cooldown is keyed on

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scope key shared by every keyword when cooldowns are voter-wide
pub const VOTER_SCOPE_KEY: &str = "*";

/// Granularity of the vote cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownScope {
    /// One cooldown per (voter, keyword)
    #[default]
    Keyword,
    /// One cooldown per voter across all keywords
    Voter,
}

impl CooldownScope {
    /// Key under which a voter's cooldown for `keyword` is stored
    pub fn scope_key<'a>(self, keyword: &'a str) -> &'a str {
        match self {
            Self::Keyword => keyword,
            Self::Voter => VOTER_SCOPE_KEY,
        }
    }
}

impl fmt::Display for CooldownScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Voter => write!(f, "voter"),
        }
    }
}

impl FromStr for CooldownScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "voter" => Ok(Self::Voter),
            _ => Err(format!("Invalid cooldown scope: {s}")),
        }
    }
}
