//! Professional directory endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{ModerationStatus, Professional};

/// Query parameters for listing professionals
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of entries to skip
    #[serde(default)]
    pub offset: usize,
    /// Filter by category (case-insensitive)
    pub categoria: Option<String>,
    /// Filter by moderation status (pending, approved, rejected)
    pub status: Option<String>,
}

fn default_limit() -> usize {
    100
}

/// GET /api/profissionais - List professionals with pagination
pub async fn list_professionals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let status = match params.status.as_deref() {
        Some(raw) => match ModerationStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                let error =
                    ApiError::bad_request(format!("Unknown status '{}'", raw));
                return (StatusCode::BAD_REQUEST, Json(error)).into_response();
            }
        },
        None => None,
    };

    let limit = params.limit.min(1000);
    let (professionals, total) = state.market.list_professionals(
        Some(limit),
        Some(params.offset),
        params.categoria.as_deref(),
        status,
    );

    Json(ApiResponse::with_total(professionals, total)).into_response()
}

/// GET /api/profissionais/:id - Get single professional
pub async fn get_professional(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.market.get_professional(&id) {
        Some(professional) => {
            (StatusCode::OK, Json(ApiResponse::new(professional))).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("Professional '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// POST /api/profissionais - Register a professional
///
/// The submitted record always enters moderation in the pending state;
/// duplicate ids are rejected.
pub async fn register_professional(
    State(state): State<Arc<AppState>>,
    Json(professional): Json<Professional>,
) -> impl IntoResponse {
    if professional.id.is_empty() || professional.category.is_empty() {
        let error = ApiError::bad_request("Fields 'id' and 'category' are required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    match state.market.register_professionals(vec![professional]) {
        Ok(registered) => match registered.into_iter().next() {
            Some(created) => {
                (StatusCode::CREATED, Json(ApiResponse::new(created))).into_response()
            }
            None => {
                let error = ApiError::conflict("Professional id already registered");
                (StatusCode::CONFLICT, Json(error)).into_response()
            }
        },
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Body for the moderation endpoint
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// PUT /api/profissionais/:id/status - Update moderation status
pub async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> impl IntoResponse {
    let status = match ModerationStatus::parse(&update.status) {
        Some(status) => status,
        None => {
            let error = ApiError::bad_request(format!(
                "Unknown status '{}', expected pending, approved or rejected",
                update.status
            ));
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.market.set_status(&id, status) {
        Ok(Some(updated)) => (StatusCode::OK, Json(ApiResponse::new(updated))).into_response(),
        Ok(None) => {
            let error = ApiError::not_found(format!("Professional '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
