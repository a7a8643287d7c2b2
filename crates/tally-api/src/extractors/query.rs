//! Query string parameters for the vote routes

use serde::Deserialize;

/// `GET /vote?user=..&msg=..`
#[derive(Debug, Default, Deserialize)]
pub struct VoteParams {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// `GET /rank?name=..`
#[derive(Debug, Default, Deserialize)]
pub struct RankParams {
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /top?page=..`
#[derive(Debug, Default, Deserialize)]
pub struct TopParams {
    /// Kept as text; anything that is not a page number means page 1
    #[serde(default)]
    pub page: Option<String>,
}
