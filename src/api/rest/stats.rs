//! Directory statistics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::ApiResponse;
use crate::api::state::AppState;
use crate::types::ModerationStatus;

/// Directory counts by moderation state
#[derive(Debug, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// GET /api/stats - Directory statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let directory = state.market.load_directory();

    let stats = DirectoryStats {
        total: directory.len(),
        pending: directory.count_by_status(ModerationStatus::Pending),
        approved: directory.count_by_status(ModerationStatus::Approved),
        rejected: directory.count_by_status(ModerationStatus::Rejected),
    };

    Json(ApiResponse::new(stats))
}
