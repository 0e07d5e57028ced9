// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorResponse, services::completion::CompletionError};

pub const INVALID_MESSAGE: &str = "Invalid message format";
pub const UPSTREAM_FAILURE: &str = "Failed to get response from AI";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid message format")]
    InvalidMessage,

    #[error("completion provider failed: {0}")]
    Upstream(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Provider detail stays in the logs.
        let (status, error) = match &self {
            AppError::InvalidMessage => (StatusCode::BAD_REQUEST, INVALID_MESSAGE),
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "completion provider error");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE)
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
        });
        (status, body).into_response()
    }
}
