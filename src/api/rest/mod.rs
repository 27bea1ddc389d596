//! REST API module for HTTP endpoints
//!
//! Provides REST endpoints for the marketplace UI:
//! - `GET /api/profissionais` - List professionals with pagination
//! - `POST /api/profissionais` - Register a professional (pending moderation)
//! - `GET /api/profissionais/:id` - Get single professional
//! - `PUT /api/profissionais/:id/status` - Moderate a professional
//! - `GET /api/smart-search` - Ranked free-text search
//! - `GET /api/stats` - Directory statistics

pub mod professionals;
pub mod search;
pub mod stats;

use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Server time of the response, Unix seconds
    pub timestamp: i64,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: chrono::Utc::now().timestamp(),
            total: None,
        }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            timestamp: chrono::Utc::now().timestamp(),
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "CONFLICT".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
