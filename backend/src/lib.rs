//! Garden Weather Advisor - Backend Server
//!
//! A single-endpoint service that combines day-level weather data from the
//! Visual Crossing timeline API with an AI-generated gardening
//! recommendation from the Mistral chat-completion API.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use services::AdvisoryService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub advisory: AdvisoryService,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn home() -> &'static str {
    "Garden Weather Advisor API v1.0"
}
