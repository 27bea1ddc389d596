//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{professionals, search, stats};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route(
            "/api/profissionais",
            get(professionals::list_professionals).post(professionals::register_professional),
        )
        .route("/api/profissionais/:id", get(professionals::get_professional))
        .route("/api/profissionais/:id/status", put(professionals::set_status))
        .route("/api/smart-search", get(search::smart_search))
        .route("/api/stats", get(stats::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::Marketplace;
    use crate::search::{Ranker, SmartSearch, SynonymTable};
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.jsonl");
        let market = Arc::new(Marketplace::with_file_path(
            path.to_string_lossy().to_string(),
        ));
        let search = SmartSearch::local(Ranker::new(SynonymTable::clinical_default()));
        let state = Arc::new(AppState::new(market, search));
        (create_router(state), dir)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_smart_search_requires_query() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/smart-search?q=%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_unknown_professional_is_404() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profissionais/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
    }
}
