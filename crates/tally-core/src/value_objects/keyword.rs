//! Keyword value object
//!
//! A vote message is reduced to its first whitespace-delimited token. The
//! lowercased token is the keyword's identity; the display string is what
//! gets shown back to users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::format::capitalize;

/// How the display string is derived from the submitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCasing {
    /// Keep the token exactly as typed
    #[default]
    Exact,
    /// Uppercase the first character, lowercase the rest
    Capitalize,
}

impl DisplayCasing {
    /// Apply this casing policy to a raw token
    pub fn apply(self, token: &str) -> String {
        match self {
            Self::Exact => token.to_string(),
            Self::Capitalize => capitalize(token),
        }
    }
}

impl fmt::Display for DisplayCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Capitalize => write!(f, "capitalize"),
        }
    }
}

impl FromStr for DisplayCasing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "capitalize" => Ok(Self::Capitalize),
            _ => Err(format!("Invalid display casing: {s}")),
        }
    }
}

/// A normalized keyword: canonical key plus display string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword {
    key: String,
    display: String,
}

impl Keyword {
    /// Normalize a raw vote message.
    ///
    /// Fails with [`DomainError::EmptyInput`] when the message holds no token.
    pub fn parse(raw: &str, casing: DisplayCasing) -> Result<Self, DomainError> {
        let token = raw
            .split_whitespace()
            .next()
            .ok_or(DomainError::EmptyInput)?;

        Ok(Self {
            key: token.to_lowercase(),
            display: casing.apply(token),
        })
    }

    /// Canonical lowercase identity
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-facing rendering
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Consume into `(key, display)`
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.display)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
