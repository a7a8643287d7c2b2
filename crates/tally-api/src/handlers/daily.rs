//! Daily leader handler

use axum::extract::State;
use chrono::Utc;
use tally_core::DomainError;
use tally_service::{DailyService, ServiceError, NO_VOTES_TODAY_MESSAGE};

use crate::response::ApiResult;
use crate::state::AppState;

/// Keyword with the most votes today
///
/// GET /fastest
pub async fn get_fastest(State(state): State<AppState>) -> ApiResult<String> {
    let service = DailyService::new(state.service_context());
    match service.fastest_today(Utc::now()).await {
        Ok(fastest) => Ok(fastest.to_string()),
        Err(ServiceError::Domain(DomainError::NoVotesToday)) => {
            Ok(NO_VOTES_TODAY_MESSAGE.to_string())
        }
        Err(e) => Err(e.into()),
    }
}
