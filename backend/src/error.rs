//! Error handling for the Garden Weather Advisor service
//!
//! Every failure carries an HTTP-equivalent status; upstream provider errors
//! mirror the provider's own status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request validation errors
    #[error("Token is required")]
    TokenMissing,

    #[error("Wrong API token")]
    WrongToken,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    // External service errors
    //
    // The status is kept as a raw u16: it crosses from the reqwest response
    // to the axum response, which sit on different http crate majors.
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::TokenMissing => (
                StatusCode::BAD_REQUEST,
                "TOKEN_REQUIRED",
                "Token is required".to_string(),
            ),
            AppError::WrongToken => (
                StatusCode::FORBIDDEN,
                "WRONG_TOKEN",
                "Wrong API token".to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Upstream { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "UPSTREAM_ERROR",
                message.clone(),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            status,
            Json(ErrorResponse {
                message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
