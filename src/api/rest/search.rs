//! Smart search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for smart search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    pub q: String,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// GET /api/smart-search - Rank approved professionals against a query
///
/// Uses the remote scorer when one is configured and falls back to the
/// local synonym-expansion ranker. An empty result set is a valid
/// outcome, not an error.
pub async fn smart_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    if params.q.trim().is_empty() {
        let error = ApiError::bad_request("Query parameter 'q' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let limit = if params.limit > 0 {
        Some(params.limit.min(1000))
    } else {
        None
    };

    let results = state
        .market
        .search_professionals(&state.search, &params.q, limit);
    let total = results.len();

    (
        StatusCode::OK,
        Json(ApiResponse::with_total(results, total)),
    )
        .into_response()
}
