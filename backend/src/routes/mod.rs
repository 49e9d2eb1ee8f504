//! Route definitions for the Garden Weather Advisor service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Advisory endpoint (authorized via the body token)
        .route("/ai_recommendation", post(handlers::ai_recommendation))
}
