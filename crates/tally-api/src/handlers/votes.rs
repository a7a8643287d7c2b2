//! Vote handler

use axum::extract::{Query, State};
use chrono::Utc;
use tally_core::DomainError;
use tally_service::{ServiceError, VoteService};

use crate::extractors::VoteParams;
use crate::response::ApiResult;
use crate::state::AppState;

/// Cast a vote
///
/// GET /vote?user={user}&msg={msg}
///
/// A missing or blank `user` or `msg` yields an empty body.
pub async fn cast_vote(
    State(state): State<AppState>,
    Query(params): Query<VoteParams>,
) -> ApiResult<String> {
    let (Some(user), Some(msg)) = (params.user, params.msg) else {
        return Ok(String::new());
    };

    let service = VoteService::new(state.service_context());
    match service.cast(&user, &msg, Utc::now()).await {
        Ok(outcome) => Ok(outcome.to_string()),
        Err(ServiceError::Domain(DomainError::EmptyInput)) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
