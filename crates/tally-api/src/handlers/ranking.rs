//! Ranking handlers

use axum::extract::{Query, State};
use tally_core::DomainError;
use tally_service::{parse_page, RankingService, ServiceError, UnknownKeyword};

use crate::extractors::{RankParams, TopParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Rank of one keyword
///
/// GET /rank?name={name}
pub async fn get_rank(
    State(state): State<AppState>,
    Query(params): Query<RankParams>,
) -> ApiResult<String> {
    let Some(name) = params.name else {
        return Ok(String::new());
    };

    let service = RankingService::new(state.service_context());
    match service.rank(&name).await {
        Ok(rank) => Ok(rank.to_string()),
        Err(ServiceError::Domain(DomainError::KeywordNotFound(name))) => {
            Ok(UnknownKeyword { name }.to_string())
        }
        Err(ServiceError::Domain(DomainError::EmptyInput)) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// One page of the leaderboard
///
/// GET /top?page={page}
pub async fn get_top(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> ApiResult<String> {
    let page = parse_page(params.page.as_deref());

    let service = RankingService::new(state.service_context());
    let top = service.top_page(page).await?;
    Ok(top.to_string())
}
